//! Import / Export
//!
//! Structured export is the JSON file users download and re-import; the
//! text export is a markdown report meant for pasting into a chat.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CURRENCY;
use crate::domain::{lenient, Item, ShoppingList};
use crate::error::{Result, ShoppingError};
use crate::state::compute_cost_per_person;

/// Structured export of one list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListExport {
    pub name: String,
    pub items: Vec<Item>,
    pub exported_at: DateTime<Utc>,
}

impl ListExport {
    /// Pretty-printed JSON, two-space indent
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A parsed structured export, before it becomes a list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportedList {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "items_or_empty")]
    pub items: Vec<Item>,
}

fn items_or_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<Item>, D::Error> {
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn export_structured(list: &ShoppingList, now: DateTime<Utc>) -> ListExport {
    ListExport {
        name: list.name.clone(),
        items: list.items.clone(),
        exported_at: now,
    }
}

/// Download file name for a structured export
pub fn export_file_name(list: &ShoppingList) -> String {
    format!("{}.json", list.name)
}

/// Parse a structured export. Item fields are taken as they are; only JSON
/// syntax and the top-level object shape are checked.
pub fn import_structured(bytes: &[u8]) -> Result<ImportedList> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| ShoppingError::Import(e.to_string()))?;
    if !value.is_object() {
        return Err(ShoppingError::Import("expected a JSON object".to_string()));
    }
    ImportedList::deserialize(value).map_err(|e| ShoppingError::Import(e.to_string()))
}

/// Two-decimal amount, ties rounded away from zero (`6.125` gives `"6.13"`)
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0 + 0.0)
}

/// Markdown report with totals and one numbered entry per item
pub fn export_text(list: &ShoppingList, people_count: u32, today: NaiveDate) -> String {
    let total = list.total_cost();
    let per_person = compute_cost_per_person(Some(list), people_count);

    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "# 🛒 {}\n", list.name);
    let _ = writeln!(text, "**Общая стоимость:** {} {}", format_money(total), CURRENCY);
    let _ = writeln!(text, "**На {} чел:** {} {}/чел\n", people_count, format_money(per_person), CURRENCY);
    let _ = writeln!(text, "## Список продуктов:\n");

    for (index, item) in list.items.iter().enumerate() {
        let _ = writeln!(text, "{}. **{}**", index + 1, item.name);
        let _ = writeln!(
            text,
            "   • {} {} × {} {cur} = {} {cur}\n",
            item.quantity,
            item.unit,
            format_money(item.price_per_unit),
            format_money(item.total_price),
            cur = CURRENCY,
        );
    }

    let _ = write!(text, "---\n*Создано {}*", today.format("%d.%m.%Y"));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemEdit, Unit};
    use chrono::TimeZone;

    fn sample_list() -> ShoppingList {
        let created = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let mut list = ShoppingList::new(1, "Ужин".to_string(), created);

        let mut milk = Item::new(2);
        milk.apply(ItemEdit::Name("Молоко".to_string()));
        milk.apply(ItemEdit::Unit(Unit::Liter));
        milk.apply(ItemEdit::Price(89.9));
        milk.apply(ItemEdit::Quantity(2.0));

        let mut apples = Item::new(3);
        apples.apply(ItemEdit::Name("Яблоки".to_string()));
        apples.apply(ItemEdit::Unit(Unit::Kilogram));
        apples.apply(ItemEdit::Quantity(1.5));
        apples.apply(ItemEdit::Total(150.0));

        list.items = vec![milk, apples];
        list
    }

    #[test]
    fn test_export_structured_shape() {
        let list = sample_list();
        let exported_at = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let export = export_structured(&list, exported_at);
        let json: Value = serde_json::from_str(&export.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["name"], "Ужин");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["items"][0]["pricePerUnit"], 89.9);
        assert_eq!(json["exportedAt"], "2026-10-19T12:00:00Z");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_export_json_is_indented() {
        let export = export_structured(&sample_list(), Utc.timestamp_millis_opt(0).unwrap());
        let text = export.to_json_pretty().unwrap();
        assert!(text.starts_with("{\n  \"name\""));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(&sample_list()), "Ужин.json");
    }

    #[test]
    fn test_import_reads_export() {
        let list = sample_list();
        let bytes = export_structured(&list, Utc.timestamp_millis_opt(0).unwrap())
            .to_json_pretty()
            .unwrap();
        let imported = import_structured(bytes.as_bytes()).unwrap();
        assert_eq!(imported.name, list.name);
        assert_eq!(imported.items, list.items);
    }

    #[test]
    fn test_import_rejects_non_json() {
        assert!(matches!(import_structured(b"hello"), Err(ShoppingError::Import(_))));
        assert!(matches!(import_structured(&[0xff, 0xfe]), Err(ShoppingError::Import(_))));
        assert!(matches!(import_structured(b""), Err(ShoppingError::Import(_))));
    }

    #[test]
    fn test_import_rejects_non_object() {
        assert!(matches!(import_structured(b"[1, 2]"), Err(ShoppingError::Import(_))));
        assert!(matches!(import_structured(b"\"text\""), Err(ShoppingError::Import(_))));
    }

    #[test]
    fn test_import_without_items_is_empty() {
        let imported = import_structured(r#"{"name": "Пусто"}"#.as_bytes()).unwrap();
        assert_eq!(imported.name, "Пусто");
        assert!(imported.items.is_empty());

        let imported = import_structured(r#"{"name": "Пусто", "items": null}"#.as_bytes()).unwrap();
        assert!(imported.items.is_empty());
    }

    #[test]
    fn test_export_text_report() {
        let list = sample_list();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let text = export_text(&list, 2, today);

        let expected = "# 🛒 Ужин\n\n\
**Общая стоимость:** 329.80 ₽\n\
**На 2 чел:** 164.90 ₽/чел\n\n\
## Список продуктов:\n\n\
1. **Молоко**\n   • 2 л × 89.90 ₽ = 179.80 ₽\n\n\
2. **Яблоки**\n   • 1.5 кг × 100.00 ₽ = 150.00 ₽\n\n\
---\n*Создано 19.10.2026*";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_money_rounds_ties_up() {
        assert_eq!(format_money(6.125), "6.13");
        assert_eq!(format_money(0.5), "0.50");
        assert_eq!(format_money(1.005), "1.00");
        assert_eq!(format_money(-0.0), "0.00");
    }

    #[test]
    fn test_export_text_half_cent_total() {
        let created = Utc.timestamp_millis_opt(0).unwrap();
        let mut list = ShoppingList::new(1, "Сыр".to_string(), created);
        let mut cheese = Item::new(2);
        cheese.apply(ItemEdit::Name("Сыр".to_string()));
        cheese.apply(ItemEdit::Unit(Unit::Kilogram));
        cheese.apply(ItemEdit::Price(12.25));
        cheese.apply(ItemEdit::Quantity(0.5));
        list.items.push(cheese);

        let text = export_text(&list, 1, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert!(text.contains("   • 0.5 кг × 12.25 ₽ = 6.13 ₽"));
        assert!(text.contains("**Общая стоимость:** 6.13 ₽"));
    }

    #[test]
    fn test_export_text_empty_list() {
        let created = Utc.timestamp_millis_opt(0).unwrap();
        let list = ShoppingList::new(1, "Пусто".to_string(), created);
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let text = export_text(&list, 3, today);
        assert!(text.contains("**Общая стоимость:** 0.00 ₽"));
        assert!(text.contains("**На 3 чел:** 0.00 ₽/чел"));
        assert!(text.ends_with("*Создано 05.01.2026*"));
    }
}
