//! Defaults filled in the invoices created through the client.

use serde_json::{json, Map, Value};

/// Fills every unset field of `invoice` the invoicing service expects.
///
/// A field counts as unset when it is missing, `null`, `false`, `0` or `""`.
pub(crate) fn fill_invoice_defaults(invoice: &mut Map<String, Value>, application_id: &str) {
    set_default(invoice, "type", json!("INVOICE"));
    set_default(invoice, "lastName", json!(""));
    set_default(invoice, "allowTips", json!(false));

    let title = invoice.get("title").cloned().unwrap_or(Value::Null);
    let order = match invoice.get_mut("order").and_then(Value::as_object_mut) {
        Some(order) => order,
        None => return,
    };

    set_default(order, "orderNumber", json!(1));

    let mut sub_total = Value::Null;
    if let Some(amounts) = order.get_mut("amounts").and_then(Value::as_object_mut) {
        set_default(amounts, "discountTotal", json!(0));
        set_default(amounts, "feeTotal", json!(0));
        set_default(amounts, "taxTotal", json!(0));
        let net_total = amounts.get("netTotal").cloned().unwrap_or(Value::Null);
        set_default(amounts, "subTotal", net_total);
        sub_total = amounts.get("subTotal").cloned().unwrap_or(Value::Null);
    }

    with_object(order, "context", |context| {
        set_default(context, "transactionInstruction", json!("NONE"));
        set_default(context, "source", json!("WEB"));
        set_default(context, "sourceApp", json!(application_id));
    });

    let item_name = order
        .get("title")
        .filter(|t| !is_unset(t))
        .cloned()
        .unwrap_or(title);
    if order.get("items").map_or(true, is_unset) {
        order.insert("items".to_string(), json!([]));
    }
    if let Some(items) = order.get_mut("items").and_then(Value::as_array_mut) {
        if items.is_empty() {
            items.push(json!({
                "name": item_name,
                "quantity": 1,
                "unitPrice": sub_total,
            }));
        }
        for item in items.iter_mut().filter_map(Value::as_object_mut) {
            let name = item.get("name").cloned().unwrap_or(Value::Null);
            set_default(item, "sku", name);
            set_default(item, "status", json!("FULFILLED"));
            set_default(item, "unitOfMeasure", json!("EACH"));
            set_default(item, "discount", json!(0));
            set_default(item, "fee", json!(0));
            set_default(item, "tax", json!(0));
            set_default(item, "taxExempted", json!(false));
        }
    }

    with_object(order, "statuses", |statuses| {
        set_default(statuses, "fulfillmentStatus", json!("FULFILLED"));
        set_default(statuses, "status", json!("OPENED"));
        set_default(statuses, "transactionStatusSummary", json!("PENDING"));
    });
}

fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn set_default(map: &mut Map<String, Value>, key: &str, default: Value) {
    if map.get(key).map_or(true, is_unset) {
        map.insert(key.to_string(), default);
    }
}

/// Applies `f` to the object stored under `key`, replacing any other value with an empty object.
fn with_object<F>(map: &mut Map<String, Value>, key: &str, f: F)
where
    F: FnOnce(&mut Map<String, Value>),
{
    let mut object = match map.remove(key) {
        Some(Value::Object(object)) => object,
        _ => Map::new(),
    };
    f(&mut object);
    map.insert(key.to_string(), Value::Object(object));
}
