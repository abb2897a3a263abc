// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured order-update responses for transactional conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Button;

/// Rich-response item wrapper for an order update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResponse {
    pub order_update: OrderUpdate,
}

/// Update pushed to the user about an order placed earlier in the
/// conversation. Only `order_state` is required by the platform; everything
/// else is sent when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_order_id: Option<String>,
    pub order_state: OrderState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_management_actions: Vec<OrderManagementAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Price>,
    /// Per line-item updates keyed by line item id.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub line_item_updates: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_notification: Option<UserNotification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_extension: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_info: Option<RejectionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_info: Option<CancellationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_transit_info: Option<InTransitInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_info: Option<FulfillmentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_info: Option<ReturnInfo>,
}

impl OrderUpdate {
    pub fn new(action_order_id: impl Into<String>, order_state: OrderState) -> Self {
        Self {
            action_order_id: Some(action_order_id.into()),
            order_state,
            ..Self::default()
        }
    }

    pub fn with_receipt(mut self, receipt: Receipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    pub fn with_total_price(mut self, price: Price) -> Self {
        self.total_price = Some(price);
        self
    }

    pub fn with_update_time(mut self, update_time: DateTime<Utc>) -> Self {
        self.update_time = Some(update_time);
        self
    }

    pub fn with_action(mut self, action: OrderManagementAction) -> Self {
        self.order_management_actions.push(action);
        self
    }

    pub fn with_notification(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.user_notification = Some(UserNotification {
            title: title.into(),
            text: text.into(),
        });
        self
    }
}

/// Machine state plus the label shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderState {
    /// One of `CREATED`, `CONFIRMED`, `REJECTED`, `CANCELLED`, `IN_TRANSIT`,
    /// `RETURNED`, `FULFILLED`.
    pub state: String,
    pub label: String,
}

impl OrderState {
    pub fn new(state: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    #[default]
    Unknown,
    ViewDetails,
    Modify,
    Cancel,
    Return,
    Exchange,
    Email,
    Call,
    Reorder,
    Review,
    CustomerService,
    FixIssue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderManagementAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub button: Button,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub confirmed_action_order_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_visible_order_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    #[default]
    Unknown,
    Estimate,
    Actual,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(rename = "type")]
    pub price_type: PriceType,
    pub amount: Money,
}

/// Currency amount as whole units plus nanos (10^-9 units).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency_code: String,
    pub units: i64,
    #[serde(default)]
    pub nanos: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserNotification {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectionInfo {
    #[serde(rename = "type")]
    pub rejection_type: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancellationInfo {
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InTransitInfo {
    pub updated_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentInfo {
    pub delivery_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnInfo {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn order_update_serializes_only_set_fields() {
        let update = OrderUpdate::new("order-42", OrderState::new("CONFIRMED", "Order confirmed"))
            .with_receipt(Receipt {
                confirmed_action_order_id: "order-42".into(),
                user_visible_order_id: String::new(),
            })
            .with_total_price(Price {
                price_type: PriceType::Actual,
                amount: Money {
                    currency_code: "USD".into(),
                    units: 12,
                    nanos: 500_000_000,
                },
            })
            .with_update_time(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());

        let value = serde_json::to_value(StructuredResponse {
            order_update: update,
        })
        .unwrap();

        assert_eq!(
            value,
            json!({
                "orderUpdate": {
                    "actionOrderId": "order-42",
                    "orderState": {"state": "CONFIRMED", "label": "Order confirmed"},
                    "receipt": {"confirmedActionOrderId": "order-42"},
                    "updateTime": "2026-01-02T03:04:05Z",
                    "totalPrice": {
                        "type": "ACTUAL",
                        "amount": {"currencyCode": "USD", "units": 12, "nanos": 500000000}
                    }
                }
            })
        );
    }
}
