use std::io::Cursor;

use rand::{SeedableRng, rngs::StdRng};

use custrec::{
    cli::menu::{MenuChoice, Session},
    core::registry::RegistryConfig,
    customer::CustomerDraft,
    restaurant::{Restaurant, SalesPolicy},
    types::php,
};

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>, StdRng>;

fn session(restaurant: Restaurant, script: &str) -> TestSession {
    Session::new(
        restaurant,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        StdRng::seed_from_u64(11),
    )
}

fn run(restaurant: Restaurant, script: &str) -> (Restaurant, String) {
    let mut s = session(restaurant, script);
    s.run().expect("session");
    let (restaurant, _, out) = s.into_parts();
    (restaurant, String::from_utf8(out).expect("utf8"))
}

#[test]
fn add_search_update_delete_flow() {
    let script = [
        "Tester",
        "1", "C", "Cruz", "Ana", "5",
        "1", "R", "Diaz", "Bo", "3000",
        "2", "1001",
        "5", "2001", "---", "Boy",
        "3",
        "6", "1001", "y",
        "2", "1001",
        "0",
    ]
    .join("\n")
        + "\n";

    let (restaurant, out) = run(Restaurant::new("Quatro"), &script);

    assert!(out.contains("Welcome to Quatro, Tester!"));
    assert!(out.contains("Customer 1001 was added to the record!"));
    assert!(out.contains("Customer 2001 was added to the record!"));
    assert!(out.contains("Loyalty Points: 5"));
    assert!(out.contains("Balance:        3000.00"));
    assert!(out.contains("Successfully updated customer 2001!"));
    assert!(out.contains("2001  Boy Diaz  3000.00"));
    assert!(out.contains("Successfully deleted customer record 1001."));
    assert!(out.contains("Sorry! There is no existing customer record for that code."));
    assert!(
        out.trim_end()
            .ends_with("Thank you for using Quatro's Customer Record Manager. Goodbye!")
    );

    let registry = restaurant.registry();
    assert!(registry.regular().is_empty());
    assert_eq!(registry.find(2001).map(|r| r.full_name()), Some("Boy Diaz".to_string()));
}

#[test]
fn empty_registry_guards_and_end_of_input() {
    let (restaurant, out) = run(Restaurant::new("Quatro"), "Tester\n2\n5\n6\n4\n9\n");

    assert!(out.contains("Sorry! There are no customer records to search."));
    assert!(out.contains("Sorry! There are no customer records to update."));
    assert!(out.contains("Sorry! There are no customer records to remove."));
    assert!(out.contains("Sorry! Sales cannot be simulated without a regular customer record."));
    assert!(out.contains("Invalid choice. Please try again."));
    assert!(restaurant.registry().is_empty());
}

#[test]
fn declined_confirmation_keeps_the_record() {
    let mut restaurant = Restaurant::new("Quatro");
    restaurant
        .registry_mut()
        .add_customer(CustomerDraft::regular("Ana", "Cruz", 0))
        .unwrap();

    let (restaurant, out) = run(restaurant, "Tester\n6\n1001\nn\n0\n");

    assert!(out.contains("Cancelled deletion of customer record 1001."));
    assert_eq!(restaurant.registry().regular().len(), 1);
}

#[test]
fn full_category_is_rejected_before_asking_for_names() {
    let mut restaurant = Restaurant::with_config(
        "Quatro",
        RegistryConfig {
            regular_capacity: 1,
            renter_capacity: 1,
        },
        SalesPolicy::default(),
    );
    restaurant
        .registry_mut()
        .add_customer(CustomerDraft::regular("Ana", "Cruz", 0))
        .unwrap();

    let (restaurant, out) = run(restaurant, "Tester\n1\nC\n0\n");

    assert!(out.contains("Sorry! The restaurant's customer record limit has been reached."));
    assert!(!out.contains("Enter last name"));
    assert_eq!(restaurant.registry().regular().len(), 1);
}

#[test]
fn renter_deposit_below_minimum_is_reprompted() {
    let (restaurant, out) = run(
        Restaurant::new("Quatro"),
        "Tester\n1\nX\nR\nLim\nDi\n2500\n3000.50\n0\n",
    );

    assert!(out.contains("Invalid choice. Please try again."));
    assert!(out.contains("greater than or equal to 3000.00"));
    assert_eq!(
        restaurant.registry().find(2001).and_then(|r| r.deposit()),
        Some(php(3000) + 50)
    );
}

#[test]
fn simulation_prints_each_purchase() {
    let mut restaurant = Restaurant::new("Quatro");
    restaurant
        .registry_mut()
        .add_customer(CustomerDraft::regular("Ana", "Cruz", 0))
        .unwrap();
    restaurant
        .registry_mut()
        .add_customer(CustomerDraft::renter("Bo", "Diaz", php(3000)))
        .unwrap();

    let mut s = session(restaurant, "");
    s.dispatch(MenuChoice::Simulate).expect("simulate");
    assert_eq!(s.restaurant().total_sales(), php(160));
    let (_, _, out) = s.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("--- Ana trying to buy food worth P75.00"));
    assert!(out.contains("Success! Bo Diaz has paid 85.00!"));
    assert!(out.contains(
        "Sorry! The transaction failed because the deposit would be below the minimum allowed."
    ));
    assert!(out.contains("=== Simulation End ==="));
}

#[test]
fn simulation_shows_records_after_every_purchase() {
    let mut restaurant = Restaurant::new("Quatro");
    restaurant
        .registry_mut()
        .add_customer(CustomerDraft::regular("Ana", "Cruz", 0))
        .unwrap();
    restaurant
        .registry_mut()
        .add_customer(CustomerDraft::renter("Bo", "Diaz", php(3000)))
        .unwrap();

    let mut s = session(restaurant, "");
    s.dispatch(MenuChoice::Simulate).expect("simulate");
    let (_, _, out) = s.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(out.matches("--- Restaurant Record ---").count(), 3);
    let after_regular = out.find("Quatro  75.00").expect("total after first purchase");
    let after_renter = out.find("Quatro  160.00").expect("total after second purchase");
    assert!(after_regular < after_renter);
    assert_eq!(out.matches("Quatro  160.00").count(), 2);
    assert!(out.contains("1001  Ana Cruz  1\n"));
}

#[test]
fn add_reports_exhausted_code_range() {
    let mut restaurant = Restaurant::new("Quatro");
    for _ in 0..999 {
        let code = restaurant
            .registry_mut()
            .add_customer(CustomerDraft::regular("Old", "Timer", 0))
            .unwrap();
        restaurant.registry_mut().delete(code).unwrap();
    }

    let mut s = session(restaurant, "C\nLate\nComer\n0\n");
    s.dispatch(MenuChoice::Add).expect("add");
    assert!(s.restaurant().registry().is_empty());
    let (_, _, out) = s.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Sorry! No more Regular Customer codes are available for new records."));
}
