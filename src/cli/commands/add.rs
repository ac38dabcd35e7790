use super::{ask, ask_secret};
use crate::core::password::PasswordHasher;
use crate::core::users::UserStore;
use crate::errors::AppResult;
use crate::ui::console::Console;
use crate::ui::messages::success;

pub fn handle<C: Console, H: PasswordHasher>(console: &mut C, store: &UserStore<H>) -> AppResult<()> {
    let username = ask(console, "Enter new username: ")?;
    let password = ask_secret(console, "Enter new password: ")?;

    let user = store.add(&username, &password)?;
    success(format!("User '{}' added successfully (ID {}).", user.username, user.id));
    Ok(())
}
