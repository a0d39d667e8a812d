//! Normalization of remote API payloads into canonical transactions.
//!
//! The server has emitted transaction listings in several shapes over time: a
//! bare JSON array, or an envelope object with the records under `items`,
//! `transactions`, or `data`, with camelCase and snake_case field spellings
//! both in the wild. Rather than letting `data.items || data` style fallbacks
//! leak into every page, this module maps whatever the server sent into the
//! canonical [Transaction] shape once, at the boundary.
//!
//! Malformed fields are recovered with safe defaults and a warning: a missing
//! amount becomes `0`, a missing category becomes `"other"`. A record whose
//! date cannot be parsed is unrecoverable and fails the whole payload with
//! [Error::InvalidDate].

use serde::Deserialize;
use serde_json::Value;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

use crate::{Error, Transaction, TransactionKind};

use super::FALLBACK_CATEGORY;

/// The envelope fields the server is known to carry record lists under.
const RECORD_LIST_FIELDS: [&str; 3] = ["items", "transactions", "data"];

/// Parse a JSON payload string into canonical transactions.
///
/// # Errors
/// Returns [Error::InvalidJson] if `payload` is not valid JSON, otherwise the
/// same errors as [transactions_from_value].
pub fn transactions_from_str(payload: &str) -> Result<Vec<Transaction>, Error> {
    let value: Value = serde_json::from_str(payload)?;
    transactions_from_value(value)
}

/// Normalize an already-parsed JSON payload into canonical transactions.
///
/// Accepts a bare array of records or an envelope object carrying the records
/// under `items`, `transactions`, or `data`. Envelope counts from
/// server-paginated responses are ignored; totals are recomputed client-side.
///
/// # Errors
/// Returns an [Error::UnrecognizedPayload] if the payload is not one of the
/// accepted shapes, or [Error::InvalidDate] if any record has a missing or
/// unparseable date.
pub fn transactions_from_value(payload: Value) -> Result<Vec<Transaction>, Error> {
    let records = match payload {
        Value::Array(records) => {
            tracing::debug!("normalizing bare array payload with {} records", records.len());
            records
        }
        Value::Object(mut envelope) => {
            let list = RECORD_LIST_FIELDS
                .iter()
                .find_map(|field| envelope.remove(*field).map(|value| (*field, value)));

            match list {
                Some((field, Value::Array(records))) => {
                    tracing::debug!(
                        "normalizing envelope payload with {} records under \"{field}\"",
                        records.len()
                    );
                    records
                }
                Some((field, _)) => {
                    return Err(Error::UnrecognizedPayload(format!(
                        "envelope field \"{field}\" is not an array"
                    )));
                }
                None => {
                    return Err(Error::UnrecognizedPayload(
                        "object payload has no items, transactions, or data field".to_owned(),
                    ));
                }
            }
        }
        other => {
            return Err(Error::UnrecognizedPayload(format!(
                "expected an array or object, got {other}"
            )));
        }
    };

    records.into_iter().map(normalize_record).collect()
}

/// A transaction record as the server sends it, before any defaulting.
#[derive(Debug, Deserialize)]
struct RawTransaction {
    id: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<String>,
    amount: Option<Value>,
    category: Option<String>,
    description: Option<String>,
    date: Option<String>,
    #[serde(alias = "userId")]
    user_id: Option<Value>,
    notes: Option<String>,
    tags: Option<Vec<String>>,
    #[serde(alias = "attachmentUrl")]
    attachment_url: Option<String>,
}

fn normalize_record(record: Value) -> Result<Transaction, Error> {
    let raw: RawTransaction = serde_json::from_value(record)
        .map_err(|error| Error::UnrecognizedPayload(format!("malformed record: {error}")))?;

    let id = raw.id.as_ref().and_then(identifier_text).unwrap_or_else(|| {
        tracing::warn!("transaction record has no id");
        String::new()
    });

    let date_text = raw.date.ok_or_else(|| {
        Error::InvalidDate("the date field is missing".to_owned(), String::new())
    })?;
    let date = parse_record_date(&date_text)?;

    Ok(Transaction {
        kind: normalize_kind(raw.kind.as_deref(), &id),
        amount: normalize_amount(raw.amount, &id),
        category: normalize_category(raw.category, &id),
        description: raw.description.unwrap_or_default(),
        date,
        user_id: raw.user_id.as_ref().and_then(identifier_text),
        notes: raw.notes,
        tags: raw.tags.unwrap_or_default(),
        attachment_url: raw.attachment_url,
        id,
    })
}

/// IDs arrive as JSON strings or numbers depending on the endpoint; numbers
/// are stringified.
fn identifier_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn normalize_kind(kind: Option<&str>, id: &str) -> TransactionKind {
    match kind {
        Some(kind) if kind.eq_ignore_ascii_case("income") => TransactionKind::Income,
        Some(kind) if kind.eq_ignore_ascii_case("expense") => TransactionKind::Expense,
        Some(other) => {
            tracing::warn!("transaction {id:?} has unknown type {other:?}, treating as expense");
            TransactionKind::Expense
        }
        None => {
            tracing::warn!("transaction {id:?} has no type, treating as expense");
            TransactionKind::Expense
        }
    }
}

fn normalize_amount(amount: Option<Value>, id: &str) -> f64 {
    let parsed = match amount {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(Value::Null) | None => None,
        Some(_) => None,
    };

    let Some(amount) = parsed.filter(|amount| amount.is_finite()) else {
        tracing::warn!("transaction {id:?} has no usable amount, defaulting to 0");
        return 0.0;
    };

    if amount < 0.0 {
        tracing::warn!("transaction {id:?} has negative amount {amount}, using absolute value");
        return amount.abs();
    }

    amount
}

fn normalize_category(category: Option<String>, id: &str) -> String {
    match category {
        Some(category) if !category.trim().is_empty() => category,
        _ => {
            tracing::warn!("transaction {id:?} has no category, defaulting to {FALLBACK_CATEGORY:?}");
            FALLBACK_CATEGORY.to_owned()
        }
    }
}

/// Parse a record date, keeping the calendar-day component.
///
/// Accepts plain `yyyy-MM-dd` dates, RFC 3339 date-times with an offset, and
/// bare date-times without one.
fn parse_record_date(value: &str) -> Result<Date, Error> {
    if let Ok(date) = Date::parse(value, &Iso8601::DEFAULT) {
        return Ok(date);
    }

    if let Ok(datetime) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(datetime.date());
    }

    PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)
        .map(|datetime| datetime.date())
        .map_err(|error| Error::InvalidDate(error.to_string(), value.to_owned()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{Error, TransactionKind};

    use super::{transactions_from_str, transactions_from_value};

    #[test]
    fn normalizes_bare_array_payload() {
        let payload = json!([
            {
                "id": "tx-1",
                "type": "expense",
                "amount": 45.5,
                "category": "food",
                "description": "groceries",
                "date": "2024-01-05",
                "user_id": "user-1",
                "tags": ["weekly"]
            }
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, "tx-1");
        assert_eq!(got[0].kind, TransactionKind::Expense);
        assert_eq!(got[0].amount, 45.5);
        assert_eq!(got[0].category, "food");
        assert_eq!(got[0].description, "groceries");
        assert_eq!(got[0].date, date!(2024 - 01 - 05));
        assert_eq!(got[0].user_id.as_deref(), Some("user-1"));
        assert_eq!(got[0].tags, vec!["weekly".to_owned()]);
    }

    #[test]
    fn normalizes_each_envelope_shape() {
        for field in ["items", "transactions", "data"] {
            let payload = json!({
                field: [{"id": 1, "type": "income", "amount": 100, "date": "2024-01-05"}],
                "totalCount": 1,
                "totalPages": 1
            });

            let got = transactions_from_value(payload)
                .unwrap_or_else(|error| panic!("envelope {field:?} failed: {error}"));

            assert_eq!(got.len(), 1, "envelope field {field:?}");
            assert_eq!(got[0].kind, TransactionKind::Income);
        }
    }

    #[test]
    fn stringifies_numeric_ids() {
        let payload = json!([
            {"id": 42, "type": "income", "amount": 10, "date": "2024-01-05", "userId": 7}
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert_eq!(got[0].id, "42");
        assert_eq!(got[0].user_id.as_deref(), Some("7"));
    }

    #[test]
    fn accepts_camel_case_field_spellings() {
        let payload = json!([
            {
                "id": "tx-1",
                "type": "expense",
                "amount": 5,
                "date": "2024-01-05",
                "userId": "user-9",
                "attachmentUrl": "https://example.com/receipt.png"
            }
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert_eq!(got[0].user_id.as_deref(), Some("user-9"));
        assert_eq!(
            got[0].attachment_url.as_deref(),
            Some("https://example.com/receipt.png")
        );
    }

    #[test]
    fn parses_numeric_string_amounts() {
        let payload = json!([
            {"id": "tx-1", "type": "expense", "amount": "12.75", "date": "2024-01-05"}
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert_eq!(got[0].amount, 12.75);
    }

    #[test]
    fn defaults_missing_amount_to_zero() {
        let payload = json!([
            {"id": "tx-1", "type": "expense", "date": "2024-01-05"},
            {"id": "tx-2", "type": "expense", "amount": null, "date": "2024-01-05"},
            {"id": "tx-3", "type": "expense", "amount": "so much", "date": "2024-01-05"}
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert!(got.iter().all(|transaction| transaction.amount == 0.0));
    }

    #[test]
    fn folds_negative_amounts_to_absolute_value() {
        let payload = json!([
            {"id": "tx-1", "type": "expense", "amount": -30.0, "date": "2024-01-05"}
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert_eq!(got[0].amount, 30.0);
        assert_eq!(got[0].kind, TransactionKind::Expense);
    }

    #[test]
    fn defaults_missing_category() {
        let payload = json!([
            {"id": "tx-1", "type": "expense", "amount": 5, "date": "2024-01-05"},
            {"id": "tx-2", "type": "expense", "amount": 5, "category": "  ", "date": "2024-01-05"}
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert_eq!(got[0].category, "other");
        assert_eq!(got[1].category, "other");
    }

    #[test]
    fn treats_unknown_type_as_expense() {
        let payload = json!([
            {"id": "tx-1", "type": "transfer", "amount": 5, "date": "2024-01-05"},
            {"id": "tx-2", "amount": 5, "date": "2024-01-05"},
            {"id": "tx-3", "type": "INCOME", "amount": 5, "date": "2024-01-05"}
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert_eq!(got[0].kind, TransactionKind::Expense);
        assert_eq!(got[1].kind, TransactionKind::Expense);
        assert_eq!(got[2].kind, TransactionKind::Income);
    }

    #[test]
    fn keeps_calendar_day_from_datetime_forms() {
        let payload = json!([
            {"id": "tx-1", "type": "expense", "amount": 5, "date": "2024-01-05"},
            {"id": "tx-2", "type": "expense", "amount": 5, "date": "2024-01-05T13:45:00Z"},
            {"id": "tx-3", "type": "expense", "amount": 5, "date": "2024-01-05T13:45:00+13:00"},
            {"id": "tx-4", "type": "expense", "amount": 5, "date": "2024-01-05T13:45:00"}
        ]);

        let got = transactions_from_value(payload).unwrap();

        assert!(got.iter().all(|transaction| transaction.date == date!(2024 - 01 - 05)));
    }

    #[test]
    fn rejects_unparseable_dates() {
        let payload = json!([
            {"id": "tx-1", "type": "expense", "amount": 5, "date": "last Tuesday"}
        ]);

        let got = transactions_from_value(payload);

        assert!(
            matches!(got, Err(Error::InvalidDate(_, ref value)) if value == "last Tuesday"),
            "got {got:?}"
        );
    }

    #[test]
    fn rejects_missing_dates() {
        let payload = json!([{"id": "tx-1", "type": "expense", "amount": 5}]);

        let got = transactions_from_value(payload);

        assert!(matches!(got, Err(Error::InvalidDate(_, _))), "got {got:?}");
    }

    #[test]
    fn rejects_unrecognized_payload_shapes() {
        let no_list = transactions_from_value(json!({"total": 3}));
        let scalar = transactions_from_value(json!(42));
        let non_array_field = transactions_from_value(json!({"items": "nope"}));

        assert!(matches!(no_list, Err(Error::UnrecognizedPayload(_))));
        assert!(matches!(scalar, Err(Error::UnrecognizedPayload(_))));
        assert!(matches!(non_array_field, Err(Error::UnrecognizedPayload(_))));
    }

    #[test]
    fn rejects_invalid_json_text() {
        let got = transactions_from_str("{not json");

        assert!(matches!(got, Err(Error::InvalidJson(_))), "got {got:?}");
    }

    #[test]
    fn parses_payload_text() {
        let got = transactions_from_str(
            r#"[{"id": "tx-1", "type": "income", "amount": 250, "date": "2024-02-29"}]"#,
        )
        .unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].date, date!(2024 - 02 - 29));
    }
}
