//! Fixed-width text rendering of restaurant and customer records.
//!
//! Every column is as wide as its longest cell (header included) plus
//! [`PADDING`]; the last column is not padded.

use crate::{
    customer::{CustomerKind, CustomerRecord},
    restaurant::Restaurant,
    types::{Centavos, format_centavos},
};

/// Spaces appended to each padded column.
pub const PADDING: usize = 2;

const NO_RECORDS: &str = "Sorry! No records to show.";

/// Name and total-sales block.
pub fn render_restaurant(name: &str, total_sales: Centavos) -> String {
    let rows = vec![vec![name.to_string(), format_centavos(total_sales)]];
    let mut out = String::from("--- Restaurant Record ---\n");
    out.push_str(&render_table(&["Name", "Total Sales"], &rows));
    out
}

/// Regular-customer table: code, full name, loyalty points.
pub fn render_regular_table(records: &[CustomerRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .filter_map(|rec| {
            rec.loyalty_points()
                .map(|points| vec![rec.code.to_string(), rec.full_name(), points.to_string()])
        })
        .collect();
    titled_table("Regular Customers", &["Code", "Name", "Loyalty Points"], &rows)
}

/// Renter table: code, full name, deposit.
pub fn render_renter_table(records: &[CustomerRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .filter_map(|rec| {
            rec.deposit().map(|deposit| {
                vec![
                    rec.code.to_string(),
                    rec.full_name(),
                    format_centavos(deposit),
                ]
            })
        })
        .collect();
    titled_table("Renters", &["Code", "Name", "Deposit"], &rows)
}

/// Restaurant block followed by both customer tables.
pub fn render_records(restaurant: &Restaurant) -> String {
    let registry = restaurant.registry();
    let mut out = render_restaurant(restaurant.name(), restaurant.total_sales());
    out.push('\n');
    out.push_str(&render_regular_table(registry.regular().list()));
    out.push('\n');
    out.push_str(&render_renter_table(registry.renters().list()));
    out
}

/// Single-record detail view.
pub fn render_customer(rec: &CustomerRecord) -> String {
    let payload = match rec.kind {
        CustomerKind::Regular { loyalty_points } => format!("Loyalty Points: {loyalty_points}"),
        CustomerKind::Renter { deposit } => {
            format!("Balance:        {}", format_centavos(deposit))
        }
    };
    format!(
        "--- {} ---\nCustomer Code:  {}\nFirst Name:     {}\nLast Name:      {}\n{payload}\n",
        rec.category().label(),
        rec.code,
        rec.first_name,
        rec.last_name,
    )
}

fn titled_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = format!("--- {title} ---\n");
    if rows.is_empty() {
        out.push_str(NO_RECORDS);
        out.push('\n');
    } else {
        out.push_str(&render_table(headers, rows));
    }
    out
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                + PADDING
        })
        .collect();

    let mut out = String::new();
    write_row(&mut out, &widths, headers.iter().copied());
    for row in rows {
        write_row(&mut out, &widths, row.iter().map(String::as_str));
    }
    out
}

fn write_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let cells: Vec<&str> = cells.collect();
    let last = cells.len().saturating_sub(1);
    for (idx, cell) in cells.iter().enumerate() {
        if idx == last {
            out.push_str(cell);
        } else {
            let pad = widths[idx].saturating_sub(cell.chars().count());
            out.push_str(cell);
            out.extend(std::iter::repeat_n(' ', pad));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_pad_to_longest_cell() {
        let table = render_table(
            &["Code", "Name"],
            &[
                vec!["1001".to_string(), "Ana Cruz".to_string()],
                vec!["1002".to_string(), "Bo".to_string()],
            ],
        );
        assert_eq!(table, "Code  Name\n1001  Ana Cruz\n1002  Bo\n");
    }

    #[test]
    fn long_value_widens_column() {
        let table = render_table(
            &["Name", "Total Sales"],
            &[vec!["Quatro Kitchen".to_string(), "0.00".to_string()]],
        );
        assert_eq!(table, "Name            Total Sales\nQuatro Kitchen  0.00\n");
    }
}
