// src/bin/hash_password.rs
use anyhow::{Context, Result, bail};
use pressroom::infrastructure::security::password::Argon2PasswordHasher;
use std::{env, io};

/// Print an argon2 hash for `ADMIN_PASSWORD_HASH`. The password comes from the
/// first argument or, when absent, from the first line of stdin.
fn main() -> Result<()> {
    let password = match env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            io::stdin()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("usage: hash_password <password>  (or pipe it on stdin)");
    }

    let hash = Argon2PasswordHasher::hash_blocking(&password)?;
    println!("{hash}");
    Ok(())
}
