//! Prints an Argon2id PHC hash for `ADMIN_PASSWORD_HASH`.
//!
//! Reads the password from the first argument, or from the first line of
//! standard input when no argument is given:
//!
//! ```text
//! echo -n 's3cret' | hash-admin-password
//! ```

use std::io::BufRead;

use anyhow::{Context, bail};

use travel_leads::auth::password::hash_password;

fn main() -> anyhow::Result<()> {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }
    let hash = hash_password(&password).context("failed to hash password")?;
    println!("{hash}");
    Ok(())
}
