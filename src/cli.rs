// src/cli.rs

use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::auth::password;
use crate::storage::Store;

#[derive(Parser)]
#[command(name = "taskd")]
#[command(about = "Task tracker server and management CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// List registered usernames
    List,
}

pub struct CliHandler {
    store: Arc<Store>,
}

impl CliHandler {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn handle_user_command(&self, cmd: UserCommands) -> anyhow::Result<()> {
        match cmd {
            UserCommands::Create { username, password } => {
                let password_hash = password::hash_password(&password)?;
                self.store.register_user(&username, password_hash).await?;
                println!("User '{}' created", username);
            }
            UserCommands::List => {
                let users = self.store.list_users().await;
                if users.is_empty() {
                    println!("No users registered");
                }
                for user in users {
                    println!("{}", user.username);
                }
            }
        }
        Ok(())
    }
}
