//! 询价业务服务
//!
//! 表单不会发送到任何地方，只记录日志并返回提示消息。

use chrono::Utc;
use tracing::info;

use super::model::{BulkInquiryForm, ContactForm, InquiryReceipt};
use crate::core::response::Notice;

#[derive(Clone, Default)]
pub struct InquiryService;

impl InquiryService {
    pub fn new() -> Self {
        Self
    }

    pub fn submit_contact(&self, form: &ContactForm) -> (InquiryReceipt, Notice) {
        info!(
            email = %form.email,
            inquiry_type = ?form.inquiry_type,
            subject = %form.subject,
            "收到联系表单"
        );
        let receipt = InquiryReceipt {
            reference_id: None,
            received_at: Utc::now().to_rfc3339(),
        };
        let notice = Notice::new(
            "Message Sent Successfully!",
            "We'll get back to you within 24 hours.",
        );
        (receipt, notice)
    }

    pub fn submit_bulk(&self, form: &BulkInquiryForm) -> (InquiryReceipt, Notice) {
        let now = Utc::now();
        let reference_id = bulk_reference_id(now.timestamp_millis());
        info!(
            reference_id = %reference_id,
            business = %form.business_name,
            business_type = ?form.business_type,
            fabric_type = ?form.fabric_type,
            quantity = ?form.quantity,
            "收到批量询价"
        );
        let notice = Notice::new(
            "Inquiry Submitted Successfully!",
            format!(
                "We'll contact you within 24 hours. Reference ID: {}",
                reference_id
            ),
        );
        let receipt = InquiryReceipt {
            reference_id: Some(reference_id),
            received_at: now.to_rfc3339(),
        };
        (receipt, notice)
    }
}

/// `BLK` + 毫秒时间戳的后 6 位
pub fn bulk_reference_id(timestamp_millis: i64) -> String {
    let digits = timestamp_millis.to_string();
    let tail = &digits[digits.len().saturating_sub(6)..];
    format!("BLK{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::inquiry::model::{BusinessType, FabricType, QuantityRange};

    #[test]
    fn reference_id_uses_last_six_digits() {
        assert_eq!(bulk_reference_id(1_760_000_123_456), "BLK123456");
        assert_eq!(bulk_reference_id(42), "BLK42");
    }

    #[test]
    fn bulk_notice_carries_reference() {
        let form = BulkInquiryForm {
            business_name: "Loom House".to_string(),
            contact_person: "Priya".to_string(),
            email: "buyer@loomhouse.in".to_string(),
            phone: "+91 90000 00000".to_string(),
            business_type: BusinessType::Tailor,
            fabric_type: FabricType::Silk,
            quantity: QuantityRange::From100To500,
            timeline: None,
            budget: None,
            requirements: "Saree silk in maroon".to_string(),
            customization: None,
        };
        let (receipt, notice) = InquiryService::new().submit_bulk(&form);
        let reference = receipt.reference_id.unwrap();
        assert!(reference.starts_with("BLK"));
        assert_eq!(reference.len(), 9);
        assert!(notice.description.ends_with(&reference));
    }
}
