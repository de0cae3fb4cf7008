use dialoguer::Input;
use eyre::{eyre, Context, Result};

/// Asks the user for the text to search for, starting from `title`.
pub fn user_edit_query(title: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt("Buscar")
        .with_initial_text(title)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}
