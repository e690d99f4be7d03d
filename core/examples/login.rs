//! Log in against the live API and print the decoded reply.
//!
//! Credentials and client configuration come from the environment:
//! `TIKTOK_USERNAME`, `TIKTOK_PASSWORD`, `TIKTOK_ACCESS_KEY`,
//! `TIKTOK_PROXY`. Run with `RUST_LOG=debug` to see the request trace.

use tiktok_core::TikTok;

fn env(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let username = env("TIKTOK_USERNAME");
    let password = env("TIKTOK_PASSWORD");
    let access_key = env("TIKTOK_ACCESS_KEY");
    let proxy = env("TIKTOK_PROXY");

    let mut tiktok = TikTok::new(true)?;
    tiktok.set_access_key(&access_key);
    tiktok.set_proxy(&proxy);

    match tiktok.login(&username, &password)?.into_value() {
        Some(reply) => println!("{reply}"),
        None => println!("login reply could not be decoded"),
    }

    Ok(())
}
