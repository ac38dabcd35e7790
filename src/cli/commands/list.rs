use crate::core::password::PasswordHasher;
use crate::core::users::UserStore;
use crate::errors::AppResult;
use crate::models::UserRecord;
use crate::utils::table::{Column, Table};

pub fn handle<H: PasswordHasher>(store: &UserStore<H>) -> AppResult<()> {
    let users = store.list()?;

    if users.is_empty() {
        println!("\nNo users found.");
        return Ok(());
    }

    println!("\nUsers in the database:");
    print!("{}", render(&users));
    Ok(())
}

pub fn render(users: &[UserRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Username"),
        Column::new("Role"),
    ]);
    for u in users {
        table.add_row(vec![u.id.to_string(), u.username.clone(), u.role.clone()]);
    }
    table.render()
}
