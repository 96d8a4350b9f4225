//! 结算步骤状态机
//!
//! CustomerInfo → Shipping → Payment → Review → Submitted。
//! 步骤切换不校验表单内容，表单在保存时单独校验。

use super::model::{CheckoutForm, CheckoutStep, CustomerInfo, PaymentDetails, ShippingAddress, StepProgress};
use crate::core::error::CoreError;

#[derive(Debug, Clone)]
pub struct CheckoutSession {
    step: CheckoutStep,
    form: CheckoutForm,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::CustomerInfo,
            form: CheckoutForm::default(),
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn is_submitted(&self) -> bool {
        self.step == CheckoutStep::Submitted
    }

    pub fn advance(&mut self) -> Result<CheckoutStep, CoreError> {
        let next = self.step.next().ok_or_else(|| {
            CoreError::Conflict(format!("Cannot continue from {} step", self.step.label()))
        })?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<CheckoutStep, CoreError> {
        let previous = self.step.back().ok_or_else(|| {
            CoreError::Conflict(format!("Cannot go back from {} step", self.step.label()))
        })?;
        self.step = previous;
        Ok(previous)
    }

    pub fn set_customer(&mut self, customer: CustomerInfo) -> Result<(), CoreError> {
        self.ensure_editable()?;
        self.form.customer = customer;
        Ok(())
    }

    pub fn set_shipping(&mut self, shipping: ShippingAddress) -> Result<(), CoreError> {
        self.ensure_editable()?;
        self.form.shipping = shipping;
        Ok(())
    }

    pub fn set_payment(&mut self, payment: PaymentDetails) -> Result<(), CoreError> {
        self.ensure_editable()?;
        self.form.payment = payment;
        Ok(())
    }

    /// 只能从 Review 提交，且只能提交一次
    pub fn submit(&mut self) -> Result<CheckoutForm, CoreError> {
        match self.step {
            CheckoutStep::Review => {
                self.step = CheckoutStep::Submitted;
                Ok(self.form.clone())
            }
            CheckoutStep::Submitted => Err(CoreError::Conflict(
                "Order is already being processed".to_string(),
            )),
            other => Err(CoreError::Conflict(format!(
                "Review your order before placing it (current step: {})",
                other.label()
            ))),
        }
    }

    /// 下单失败时回到 Review，表单保留
    pub fn reopen(&mut self) {
        if self.is_submitted() {
            self.step = CheckoutStep::Review;
        }
    }

    /// 下单完成后回到第一步，表单清空
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        CheckoutStep::PROGRESS
            .iter()
            .map(|step| StepProgress {
                number: step.number(),
                name: step.label(),
                completed: step.number() < self.step.number() && *step != CheckoutStep::Review,
                current: *step == self.step,
            })
            .collect()
    }

    fn ensure_editable(&self) -> Result<(), CoreError> {
        if self.is_submitted() {
            return Err(CoreError::Conflict(
                "Order is already being processed".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_forward_and_back() {
        let mut session = CheckoutSession::new();
        assert_eq!(session.step(), CheckoutStep::CustomerInfo);
        assert_eq!(session.advance().unwrap(), CheckoutStep::Shipping);
        assert_eq!(session.advance().unwrap(), CheckoutStep::Payment);
        assert_eq!(session.back().unwrap(), CheckoutStep::Shipping);
        assert_eq!(session.advance().unwrap(), CheckoutStep::Payment);
        assert_eq!(session.advance().unwrap(), CheckoutStep::Review);
        assert!(matches!(session.advance(), Err(CoreError::Conflict(_))));
    }

    #[test]
    fn cannot_go_back_from_first_step() {
        let mut session = CheckoutSession::new();
        assert!(matches!(session.back(), Err(CoreError::Conflict(_))));
        assert_eq!(session.step(), CheckoutStep::CustomerInfo);
    }

    #[test]
    fn transitions_do_not_require_form_data() {
        let mut session = CheckoutSession::new();
        session.advance().unwrap();
        session.advance().unwrap();
        session.advance().unwrap();
        let form = session.submit().unwrap();
        assert_eq!(form, CheckoutForm::default());
    }

    #[test]
    fn submit_only_from_review_and_once() {
        let mut session = CheckoutSession::new();
        assert!(session.submit().is_err());

        for _ in 0..3 {
            session.advance().unwrap();
        }
        session.submit().unwrap();
        assert!(session.is_submitted());
        assert!(session.submit().is_err());
        assert!(session.back().is_err());
        assert!(session.set_payment(PaymentDetails::default()).is_err());

        session.reset();
        assert_eq!(session.step(), CheckoutStep::CustomerInfo);
    }

    #[test]
    fn reopen_returns_submitted_session_to_review() {
        let mut session = CheckoutSession::new();
        session.reopen();
        assert_eq!(session.step(), CheckoutStep::CustomerInfo);

        for _ in 0..3 {
            session.advance().unwrap();
        }
        session.set_payment(PaymentDetails::default()).unwrap();
        session.submit().unwrap();
        session.reopen();
        assert_eq!(session.step(), CheckoutStep::Review);
        assert!(session.back().is_ok());
    }

    #[test]
    fn progress_marks_completed_steps() {
        let mut session = CheckoutSession::new();
        session.advance().unwrap();
        session.advance().unwrap();

        let progress = session.progress();
        let completed: Vec<bool> = progress.iter().map(|p| p.completed).collect();
        let current: Vec<bool> = progress.iter().map(|p| p.current).collect();
        assert_eq!(completed, vec![true, true, false, false]);
        assert_eq!(current, vec![false, false, true, false]);
    }
}
