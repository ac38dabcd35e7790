use super::{ask, ask_secret};
use crate::core::password::PasswordHasher;
use crate::core::users::UserStore;
use crate::errors::AppResult;
use crate::ui::console::Console;
use crate::ui::messages::success;

pub fn handle<C: Console, H: PasswordHasher>(console: &mut C, store: &UserStore<H>) -> AppResult<()> {
    let id = ask(console, "Enter the ID of the user to edit: ")?;
    let password = ask_secret(console, "Enter the new password: ")?;

    store.edit_password(&id, &password)?;
    success("Password updated successfully.");
    Ok(())
}
