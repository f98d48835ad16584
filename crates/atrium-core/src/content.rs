//! # Static Page Content
//!
//! Content providers for the routes that render locally-constructed
//! data: legal documents, the documentation tree, and marketplace
//! listings. These routes have no failure path — everything here is
//! constructed in memory and cannot fail short of the rendering layer
//! itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// -- Legal documents ----------------------------------------------------------

/// One heading + body block of a legal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSection {
    pub heading: String,
    pub body: String,
}

/// A complete legal document (cookies, privacy, terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDoc {
    pub slug: String,
    pub title: String,
    pub effective: NaiveDate,
    pub sections: Vec<LegalSection>,
}

fn section(heading: &str, body: &str) -> LegalSection {
    LegalSection {
        heading: heading.to_string(),
        body: body.to_string(),
    }
}

/// The cookie policy.
pub fn cookie_policy() -> LegalDoc {
    LegalDoc {
        slug: "cookies".to_string(),
        title: "Cookie Policy".to_string(),
        effective: NaiveDate::from_ymd_opt(2026, 1, 15).expect("static date"),
        sections: vec![
            section(
                "What cookies we set",
                "Atrium sets a session cookie required for signed-in areas and an \
                 anonymous preference cookie that remembers dismissed banners. We do \
                 not set third-party advertising cookies.",
            ),
            section(
                "Managing cookies",
                "Your browser can block or delete cookies at any time. Blocking the \
                 session cookie signs you out of the marketplace and verification \
                 areas; the rest of the site keeps working.",
            ),
        ],
    }
}

/// The privacy policy.
pub fn privacy_policy() -> LegalDoc {
    LegalDoc {
        slug: "privacy".to_string(),
        title: "Privacy Policy".to_string(),
        effective: NaiveDate::from_ymd_opt(2026, 1, 15).expect("static date"),
        sections: vec![
            section(
                "What we collect",
                "Account details you provide (name, email), identity-verification \
                 results from our verification partner, and standard server logs \
                 retained for thirty days.",
            ),
            section(
                "What we never do",
                "We do not sell personal data and we do not share verification \
                 documents with marketplace vendors. Vendors see only a verified \
                 badge.",
            ),
            section(
                "Your rights",
                "You can request an export or deletion of your data at any time by \
                 writing to privacy@atrium.example.",
            ),
        ],
    }
}

/// The terms of service.
pub fn terms_of_service() -> LegalDoc {
    LegalDoc {
        slug: "terms".to_string(),
        title: "Terms of Service".to_string(),
        effective: NaiveDate::from_ymd_opt(2026, 1, 15).expect("static date"),
        sections: vec![
            section(
                "Your account",
                "You are responsible for activity under your account. Identity \
                 verification is required before listing products on the \
                 marketplace.",
            ),
            section(
                "Acceptable use",
                "Do not misrepresent verification status, scrape other vendors' \
                 listings, or resell access to the service.",
            ),
            section(
                "Changes",
                "We will announce material changes to these terms at least fourteen \
                 days before they take effect.",
            ),
        ],
    }
}

// -- Documentation tree -------------------------------------------------------

/// One article in the documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocArticle {
    pub slug: String,
    pub title: String,
    pub summary: String,
}

/// A titled group of documentation articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    pub title: String,
    pub articles: Vec<DocArticle>,
}

fn article(slug: &str, title: &str, summary: &str) -> DocArticle {
    DocArticle {
        slug: slug.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
    }
}

/// The documentation tree rendered at `/documentation`.
pub fn documentation_tree() -> Vec<DocSection> {
    vec![
        DocSection {
            title: "Getting started".to_string(),
            articles: vec![
                article(
                    "quickstart",
                    "Quickstart",
                    "Create an account, verify your identity, and publish a first listing.",
                ),
                article(
                    "concepts",
                    "Core concepts",
                    "Listings, vendors, verification, and how the marketplace ties them together.",
                ),
            ],
        },
        DocSection {
            title: "Marketplace".to_string(),
            articles: vec![
                article(
                    "listings",
                    "Managing listings",
                    "Draft, publish, and retire marketplace listings.",
                ),
                article(
                    "verification",
                    "Vendor verification",
                    "What the identity check covers and how the verified badge works.",
                ),
            ],
        },
        DocSection {
            title: "Account".to_string(),
            articles: vec![article(
                "billing",
                "Billing",
                "Plans, invoices, and changing your subscription.",
            )],
        },
    ]
}

// -- Marketplace --------------------------------------------------------------

/// One product listing shown on the marketplace page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub slug: String,
    pub name: String,
    pub vendor: String,
    pub tagline: String,
    /// Whether the vendor has completed identity verification.
    pub vendor_verified: bool,
}

fn listing(slug: &str, name: &str, vendor: &str, tagline: &str, verified: bool) -> MarketplaceListing {
    MarketplaceListing {
        slug: slug.to_string(),
        name: name.to_string(),
        vendor: vendor.to_string(),
        tagline: tagline.to_string(),
        vendor_verified: verified,
    }
}

/// Listings for `/products/marketplace`.
///
/// Static catalogue for now; the marketplace data API is an external
/// collaborator and swaps in behind this same shape.
pub fn marketplace_listings() -> Vec<MarketplaceListing> {
    vec![
        listing(
            "ledgerlink",
            "LedgerLink",
            "Northwind Data",
            "Sync invoices into your accounting stack.",
            true,
        ),
        listing(
            "shiftboard",
            "Shiftboard",
            "Meridian Labs",
            "Rota planning that respects local labour rules.",
            true,
        ),
        listing(
            "papertrail",
            "Papertrail",
            "Foxglove Systems",
            "Audit-ready document retention.",
            false,
        ),
    ]
}
