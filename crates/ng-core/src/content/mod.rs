//! Static site content
//!
//! Copy lives here as plain data; the modules below assemble it into
//! [`Page`](crate::page::Page) values.

pub mod customer_care;
pub mod home;
pub mod hr;
pub mod services;
pub mod training;

use crate::page::HexTile;

/// Company contact details, rendered verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub address: [&'static str; 2],
}

pub const CONTACT: Contact = Contact {
    phone: "+91-8808062698",
    email: "edu.info@nemesisgroup.in",
    website: "www.nemesisgroup.in",
    address: ["TAJPUR ROAD HUNDAL CHOWK", "LUDHIANA, PUNJAB 141015"],
};

pub const BRAND: &str = "NEMESIS GROUP";
pub const BRAND_MARK: &str = "NG";
pub const BRAND_TAGLINE: &str = "Certified Professional Training";

/// Remote photo URL with the crop parameters used everywhere on the site
macro_rules! photo {
    ($id:literal) => {
        concat!(
            "https://images.unsplash.com/",
            $id,
            "?auto=format&fit=crop&w=1200&q=80"
        )
    };
}

pub const PHOTO_CLASSROOM: &str = photo!("photo-1522202176988-66273c2fd55f");
pub const PHOTO_TEAM: &str = photo!("photo-1521737604893-d14cc237f11d");
pub const PHOTO_CAREER: &str = photo!("photo-1551836022-4c4c79ecde51");
pub const PHOTO_SUPPORT_TEAM: &str = photo!("photo-1556761175-4b46a572b786");

pub const fn hex(src: &'static str, alt: &'static str) -> HexTile {
    HexTile { src, alt }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_constants() {
        assert_eq!(CONTACT.phone, "+91-8808062698");
        assert_eq!(CONTACT.email, "edu.info@nemesisgroup.in");
        assert_eq!(CONTACT.website, "www.nemesisgroup.in");
        assert_eq!(CONTACT.address[1], "LUDHIANA, PUNJAB 141015");
    }

    #[test]
    fn test_photo_urls() {
        assert_eq!(
            PHOTO_TEAM,
            "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?auto=format&fit=crop&w=1200&q=80"
        );
        for src in [PHOTO_CLASSROOM, PHOTO_TEAM, PHOTO_CAREER, PHOTO_SUPPORT_TEAM] {
            assert!(src.starts_with("https://images.unsplash.com/photo-"));
        }
    }
}
