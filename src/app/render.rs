use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::ui::prelude::*;
use crate::users::UsersData;

const MENU: [(&str, &str); 5] = [
    ("list", "show all users"),
    ("add", "add new user to the list"),
    ("remove", "remove user from the list"),
    ("edit", "edit existing user"),
    ("quit", "quit the app"),
];

/// Static welcome banner and action menu, shown once at startup.
pub fn banner() {
    emit(Level::Info, "app.banner", "Welcome to the UsersApp!", None);
    if get_output_format() == OutputFormat::Json {
        return;
    }
    separator(false);

    let mut heading = Message::new("AVAILABLE ACTIONS");
    heading.capitalize();
    emit(Level::Info, "app.menu", heading.content(), None);
    println!();
    for (token, help) in MENU {
        Message::new(format!("{token:<7}– {help}")).show();
    }
    println!();
}

/// Full user listing: info header, then a table of all records in
/// insertion order, or a placeholder when the store is empty. In JSON mode
/// the records travel as event data instead of an ASCII table.
pub fn show_all(store: &UsersData) {
    if get_output_format() == OutputFormat::Json {
        let data = serde_json::to_value(store.all()).expect("serialize users");
        emit(Level::Info, "users.list", "Users data", Some(data));
        return;
    }

    emit(Level::Info, "users.list", "Users data", None);
    if store.is_empty() {
        Message::new("No data...").show();
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Age"]);
    for user in store.all() {
        table.add_row(vec![user.name().to_string(), user.age().to_string()]);
    }
    println!("{table}");
}
