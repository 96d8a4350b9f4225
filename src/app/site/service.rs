//! 店铺静态信息服务

use serde::Serialize;

use super::content::{
    Highlight, Milestone, Stat, BUSINESS_HOURS, FAQ_TOPICS, FEATURED_PRODUCT_IDS, MILESTONES,
    STATS, TAGLINE, TEAM, VALUES, WHY_CHOOSE_US,
};
use super::links::{self, ContactLink};
use super::page::{NavLink, Page};
use crate::app::catalog::{model::Category, CatalogService, Product};
use crate::infrastructure::config::StoreConfig;

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub store_name: String,
    pub tagline: &'static str,
    pub navigation: Vec<NavLink>,
    pub categories: Vec<CategoryLink>,
    pub featured: Vec<Product>,
    pub why_choose_us: &'static [Highlight],
    pub whatsapp: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryLink {
    #[serde(flatten)]
    pub category: Category,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub store_name: String,
    pub values: &'static [Highlight],
    pub milestones: &'static [Milestone],
    pub stats: &'static [Stat],
    pub team: &'static [Highlight],
}

#[derive(Debug, Serialize)]
pub struct ContactView {
    pub address: String,
    pub phones: Vec<ContactLink>,
    pub emails: Vec<ContactLink>,
    pub quick_contact: Vec<ContactLink>,
    pub business_hours: &'static [&'static str],
    pub faq_topics: &'static [&'static str],
}

/// 页面解析结果
#[derive(Debug, Serialize)]
pub struct PageResolution {
    #[serde(flatten)]
    pub page: Page,
    pub canonical_path: String,
    pub found: bool,
    /// 页面不存在时的返回入口
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_link: Option<String>,
}

#[derive(Clone)]
pub struct SiteService {
    store: StoreConfig,
    catalog: CatalogService,
}

impl SiteService {
    pub fn new(store: StoreConfig, catalog: CatalogService) -> Self {
        Self { store, catalog }
    }

    pub fn home(&self) -> HomeView {
        let categories = self
            .catalog
            .categories()
            .iter()
            .filter(|c| c.id != "all")
            .map(|c| CategoryLink {
                category: *c,
                href: Page::Products {
                    category: Some(c.id.to_string()),
                }
                .path(),
            })
            .collect();

        let featured = FEATURED_PRODUCT_IDS
            .iter()
            .filter_map(|id| self.catalog.find(id))
            .cloned()
            .collect();

        HomeView {
            store_name: self.store.name.clone(),
            tagline: TAGLINE,
            navigation: Page::navigation(),
            categories,
            featured,
            why_choose_us: &WHY_CHOOSE_US,
            whatsapp: links::whatsapp(&self.store.whatsapp_phone),
        }
    }

    pub fn about(&self) -> AboutView {
        AboutView {
            store_name: self.store.name.clone(),
            values: &VALUES,
            milestones: &MILESTONES,
            stats: &STATS,
            team: &TEAM,
        }
    }

    pub fn contact(&self) -> ContactView {
        let phones = [&self.store.showroom_phone, &self.store.support_phone]
            .into_iter()
            .map(|phone| ContactLink {
                label: phone.clone(),
                href: links::tel(phone),
            })
            .collect();

        let emails = self
            .store
            .contact_emails
            .iter()
            .map(|email| ContactLink {
                label: email.clone(),
                href: links::mailto(email),
            })
            .collect();

        let quick_contact = vec![
            ContactLink {
                label: "WhatsApp Chat".to_string(),
                href: links::whatsapp(&self.store.whatsapp_phone),
            },
            ContactLink {
                label: "Call Directly".to_string(),
                href: links::tel(&self.store.support_phone),
            },
            ContactLink {
                label: "Email Support".to_string(),
                href: links::mailto(&self.store.support_email),
            },
        ];

        ContactView {
            address: self.store.address.clone(),
            phones,
            emails,
            quick_contact,
            business_hours: &BUSINESS_HOURS,
            faq_topics: &FAQ_TOPICS,
        }
    }

    /// 解析前端路径；商品不存在时给出返回商品列表的入口
    pub fn resolve(&self, uri: &str) -> PageResolution {
        let page = Page::parse(uri);
        let (found, back_link) = match &page {
            Page::ProductDetail { id } if self.catalog.find(id).is_none() => {
                (false, Some(Page::Products { category: None }.path()))
            }
            Page::NotFound { .. } => (false, Some(Page::Home.path())),
            _ => (true, None),
        };
        PageResolution {
            canonical_path: page.path(),
            page,
            found,
            back_link,
        }
    }
}
