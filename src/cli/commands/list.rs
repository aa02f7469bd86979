//! List users / ideas command handlers

use std::io::{self, Write};

use crate::config::Config;
use crate::db::Store;
use crate::entities::{ideas, users};

async fn open_store(config: &Config) -> anyhow::Result<Store> {
    Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

pub async fn cmd_list_users(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let users = store.list_users().await?;
    write_users(&mut io::stdout().lock(), &users)
}

pub async fn cmd_list_ideas(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let ideas = store.list_ideas().await?;
    write_ideas(&mut io::stdout().lock(), &ideas)
}

pub fn write_users(out: &mut impl Write, users: &[users::Model]) -> anyhow::Result<()> {
    if users.is_empty() {
        writeln!(out, "No users registered.")?;
        return Ok(());
    }

    writeln!(out, "Users ({} total)", users.len())?;
    writeln!(out, "{:-<70}", "")?;

    for user in users {
        writeln!(out, "• {} ({})", user.username, user.id)?;
        writeln!(out, "  Registered: {}", user.created_at)?;
    }

    Ok(())
}

pub fn write_ideas(out: &mut impl Write, ideas: &[ideas::Model]) -> anyhow::Result<()> {
    if ideas.is_empty() {
        writeln!(out, "No ideas yet.")?;
        return Ok(());
    }

    writeln!(out, "Ideas ({} total)", ideas.len())?;
    writeln!(out, "{:-<70}", "")?;

    for idea in ideas {
        writeln!(out, "• {} ({})", idea.idea, idea.id)?;
        writeln!(out, "  {}", idea.description)?;
        writeln!(out, "  Updated: {}", idea.updated_at)?;
    }

    Ok(())
}
