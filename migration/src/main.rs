//! Applies or reverts the gdp schema by hand, ie. `cargo run -p migration -- up`.
//! The web server runs the same migrations on start up unless told not to.
use sea_orm_migration::prelude::*;

#[cfg(not(test))]
#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}

#[cfg(test)]
fn main() {}
