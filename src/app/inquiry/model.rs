//! 联系表单与批量询价表单

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Product,
    Order,
    Bulk,
    Custom,
    Shipping,
    Returns,
    General,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    pub inquiry_type: Option<InquiryType>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    FashionBrand,
    InteriorDesigner,
    Tailor,
    Retailer,
    Manufacturer,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FabricType {
    Cotton,
    Silk,
    Linen,
    Synthetic,
    Blended,
    HomeTextiles,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityRange {
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100-500")]
    From100To500,
    #[serde(rename = "500-1000")]
    From500To1000,
    #[serde(rename = "1000-5000")]
    From1000To5000,
    #[serde(rename = "5000+")]
    Above5000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeline {
    Urgent,
    #[serde(rename = "1-month")]
    OneMonth,
    #[serde(rename = "2-3-months")]
    TwoToThreeMonths,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under-50k")]
    Under50k,
    #[serde(rename = "50k-1l")]
    From50kTo1L,
    #[serde(rename = "1l-5l")]
    From1LTo5L,
    #[serde(rename = "5l+")]
    Above5L,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkInquiryForm {
    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,
    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub business_type: BusinessType,
    pub fabric_type: FabricType,
    pub quantity: QuantityRange,
    #[serde(default)]
    pub timeline: Option<Timeline>,
    #[serde(default)]
    pub budget: Option<BudgetRange>,
    #[validate(length(min = 1, message = "Specific requirements are required"))]
    pub requirements: String,
    #[serde(default)]
    pub customization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    pub received_at: String,
}
