//! 结算数据模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::cart::{CartItem, CartSummary};

/// 结算步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    CustomerInfo,
    Shipping,
    Payment,
    Review,
    Submitted,
}

impl CheckoutStep {
    pub const PROGRESS: [CheckoutStep; 4] = [
        CheckoutStep::CustomerInfo,
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::CustomerInfo => 1,
            CheckoutStep::Shipping => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Review => 4,
            CheckoutStep::Submitted => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckoutStep::CustomerInfo => "Customer Info",
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
            CheckoutStep::Submitted => "Submitted",
        }
    }

    /// "Continue"；Review 之后只能提交订单
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::CustomerInfo => Some(CheckoutStep::Shipping),
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review | CheckoutStep::Submitted => None,
        }
    }

    /// "Back"
    pub fn back(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::CustomerInfo),
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
            CheckoutStep::CustomerInfo | CheckoutStep::Submitted => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ShippingAddress {
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Pincode is required"))]
    pub pincode: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Debit,
    Credit,
    Netbanking,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Debit => "Debit Card",
            PaymentMethod::Credit => "Credit Card",
            PaymentMethod::Netbanking => "Internet Banking",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    #[serde(default)]
    pub method: PaymentMethod,
    /// 仅记录勾选状态，不做任何持久化
    #[serde(default)]
    pub save_info: bool,
}

/// 结算表单（各步骤共用）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckoutForm {
    pub customer: CustomerInfo,
    pub shipping: ShippingAddress,
    pub payment: PaymentDetails,
}

#[derive(Debug, Serialize)]
pub struct StepProgress {
    pub number: u8,
    pub name: &'static str,
    pub completed: bool,
    pub current: bool,
}

/// 结算页响应
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub step: CheckoutStep,
    pub progress: Vec<StepProgress>,
    pub form: CheckoutForm,
    pub items: Vec<CartItem>,
    pub summary: CartSummary,
}

/// 下单成功后的订单信息，只保存在内存中
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub placed_on: NaiveDate,
    pub estimated_delivery: NaiveDate,
    pub items: Vec<CartItem>,
    pub summary: CartSummary,
    pub customer: CustomerInfo,
    pub shipping: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub payment_method_name: &'static str,
    pub save_info: bool,
}
