//! 外部链接（WhatsApp、电话、邮件），只用于展示

use serde::Serialize;

use crate::infrastructure::config::phone_digits;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

pub fn whatsapp(phone: &str) -> String {
    format!("https://wa.me/{}", phone_digits(phone))
}

pub fn tel(phone: &str) -> String {
    format!("tel:+{}", phone_digits(phone))
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address.trim())
}
