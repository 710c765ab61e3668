//! CLI module for the tablo workflow
//!
//! Provides the command-line interface using clap. Every workflow command
//! prints the JSON action response to stdout.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{MediaId, User, WorkflowStep};

/// Tablo - guest photo-selection workflow for school yearbook projects
#[derive(Parser, Debug)]
#[command(name = "tablo")]
#[command(version)]
#[command(about = "Guest photo-selection workflow for school yearbook projects")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory used to locate .tablo
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

/// The user and gallery an action applies to
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Gallery ID
    #[arg(long)]
    pub gallery: u64,

    /// User ID
    #[arg(long)]
    pub user: u64,

    /// The user is an already registered customer (skips registration)
    #[arg(long)]
    pub customer: bool,
}

impl Target {
    pub fn user(&self) -> User {
        if self.customer {
            User::customer(self.user)
        } else {
            User::guest(self.user)
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the .tablo directory with a default config
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Save the photos the guest appears on
    Claim {
        #[command(flatten)]
        target: Target,

        /// Photo IDs
        ids: Vec<MediaId>,
    },

    /// Save the photos chosen for retouching
    Retouch {
        #[command(flatten)]
        target: Target,

        /// Photo IDs
        ids: Vec<MediaId>,
    },

    /// Pick the tablo photo
    TabloPhoto {
        #[command(flatten)]
        target: Target,

        /// Photo ID
        id: MediaId,
    },

    /// Clear the tablo photo
    ClearTablo {
        #[command(flatten)]
        target: Target,
    },

    /// Move to the next step
    Next {
        #[command(flatten)]
        target: Target,
    },

    /// Move to the previous step
    Previous {
        #[command(flatten)]
        target: Target,
    },

    /// Jump to a step (claiming, registration, retouch, tablo)
    Goto {
        #[command(flatten)]
        target: Target,

        step: WorkflowStep,
    },

    /// Lock the selection
    Finalize {
        #[command(flatten)]
        target: Target,

        /// Note for the studio
        #[arg(long)]
        comment: Option<String>,
    },

    /// Re-open a finalized selection
    RequestModification {
        #[command(flatten)]
        target: Target,
    },

    /// Show the current progress
    Status {
        #[command(flatten)]
        target: Target,
    },

    /// Show the view data of a step
    StepData {
        #[command(flatten)]
        target: Target,

        step: WorkflowStep,
    },
}
