//! JSON output formatting for records and balances.

use wallet_core::{Balance, Record};

/// Convert a record and its ledger index to JSON for output.
pub fn record_json(index: usize, record: &Record) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "date": record.date_string(),
        "category": record.category().label(),
        "amount": record.amount(),
        "description": record.description(),
    })
}

/// Convert indexed records to a JSON array for output.
pub fn records_json(records: &[(usize, &Record)]) -> Vec<serde_json::Value> {
    records
        .iter()
        .map(|(index, record)| record_json(*index, record))
        .collect()
}

/// Convert a balance to JSON for output.
pub fn balance_json(balance: &Balance) -> serde_json::Value {
    serde_json::json!({
        "income": balance.income,
        "expense": balance.expense,
        "net": balance.net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_fields() {
        let record = Record::parse("2024-04-10", "Expense", "15000", "Rent").unwrap();
        let value = record_json(1, &record);
        assert_eq!(value["index"], 1);
        assert_eq!(value["date"], "2024-04-10");
        assert_eq!(value["category"], "Expense");
        assert_eq!(value["amount"], 15000);
        assert_eq!(value["description"], "Rent");
    }

    #[test]
    fn test_balance_json() {
        let balance = Balance {
            income: 50000,
            expense: 15000,
            net: 35000,
        };
        let value = balance_json(&balance);
        assert_eq!(value["net"], 35000);
    }
}
