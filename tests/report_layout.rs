use custrec::{
    customer::CustomerDraft,
    report::{render_customer, render_records, render_regular_table, render_renter_table},
    restaurant::Restaurant,
    types::php,
};

#[test]
fn regular_table_keeps_store_order() {
    let records = vec![
        CustomerDraft::regular("Ana", "Cruz", 12).into_record(1003),
        CustomerDraft::regular("Bo", "Dela Cruz", 0).into_record(1001),
    ];
    let table = render_regular_table(&records);
    assert_eq!(
        table,
        "--- Regular Customers ---\n\
         Code  Name          Loyalty Points\n\
         1003  Ana Cruz      12\n\
         1001  Bo Dela Cruz  0\n"
    );
}

#[test]
fn empty_tables_say_so() {
    assert_eq!(
        render_renter_table(&[]),
        "--- Renters ---\nSorry! No records to show.\n"
    );
}

#[test]
fn renter_table_skips_regular_records() {
    let records = vec![
        CustomerDraft::regular("Ana", "Cruz", 1).into_record(1001),
        CustomerDraft::renter("Bo", "Diaz", -php(500)).into_record(2001),
    ];
    let table = render_renter_table(&records);
    assert!(table.contains("2001  Bo Diaz  -500.00"));
    assert!(!table.contains("1001"));
}

#[test]
fn full_report_has_restaurant_block_and_both_tables() {
    let mut r = Restaurant::new("Quatro");
    r.registry_mut()
        .add_customer(CustomerDraft::renter("Bo", "Diaz", php(3000)))
        .unwrap();
    r.purchase(2001, php(85)).unwrap();

    let text = render_records(&r);
    assert!(text.starts_with("--- Restaurant Record ---\nName    Total Sales\nQuatro  85.00\n"));
    assert!(text.contains("--- Regular Customers ---\nSorry! No records to show.\n"));
    assert!(text.contains("2001  Bo Diaz  2915.00"));
}

#[test]
fn detail_view_lists_category_fields() {
    let rec = CustomerDraft::renter("Bo", "Diaz", php(3000)).into_record(2001);
    let text = render_customer(&rec);
    assert_eq!(
        text,
        "--- Renter ---\n\
         Customer Code:  2001\n\
         First Name:     Bo\n\
         Last Name:      Diaz\n\
         Balance:        3000.00\n"
    );
}
