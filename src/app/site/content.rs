//! 静态页面内容

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TAGLINE: &str = "Trusted Since 1995";

pub static WHY_CHOOSE_US: [Highlight; 4] = [
    Highlight { title: "Quality Assured", description: "Every fabric tested" },
    Highlight { title: "Fast Delivery", description: "On-time shipping" },
    Highlight { title: "Expert Support", description: "24/7 assistance" },
    Highlight { title: "29+ Years", description: "Trusted experience" },
];

/// 首页推荐商品 id
pub const FEATURED_PRODUCT_IDS: [&str; 3] = ["1", "2", "3"];

pub static VALUES: [Highlight; 4] = [
    Highlight {
        title: "Quality Assurance",
        description: "Every fabric undergoes rigorous quality checks to ensure premium standards.",
    },
    Highlight {
        title: "Customer First",
        description: "Your satisfaction is our priority. We build lasting relationships through exceptional service.",
    },
    Highlight {
        title: "Innovation",
        description: "Constantly evolving with new designs, techniques, and sustainable practices.",
    },
    Highlight {
        title: "Reliable Service",
        description: "Consistent quality, on-time delivery, and dependable customer support.",
    },
];

pub static MILESTONES: [Milestone; 5] = [
    Milestone { year: "1995", title: "Founded", description: "Started as a small family textile business in Coimbatore" },
    Milestone { year: "2005", title: "Expansion", description: "Expanded to serve fashion brands and interior designers" },
    Milestone { year: "2015", title: "Modernization", description: "Invested in modern machinery and quality control systems" },
    Milestone { year: "2020", title: "Digital Presence", description: "Launched online platform to serve customers nationwide" },
    Milestone { year: "2024", title: "Sustainable Focus", description: "Committed to eco-friendly and sustainable textile practices" },
];

pub static STATS: [Stat; 2] = [
    Stat { value: "29+", label: "Years Experience" },
    Stat { value: "5000+", label: "Happy Customers" },
];

pub static TEAM: [Highlight; 3] = [
    Highlight { title: "Production Team", description: "Expert craftspeople ensuring quality in every meter" },
    Highlight { title: "Design Team", description: "Creative professionals bringing new patterns to life" },
    Highlight { title: "Customer Care", description: "Dedicated support for all your textile needs" },
];

pub static BUSINESS_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 7:00 PM",
    "Saturday: 9:00 AM - 5:00 PM",
    "Sunday: Closed",
];

pub static FAQ_TOPICS: [&str; 5] = [
    "Fabric specifications and care instructions",
    "Shipping and delivery information",
    "Return and exchange policies",
    "Bulk order processes",
    "Custom fabric requirements",
];
