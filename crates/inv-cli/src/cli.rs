//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use inv_core::ItemChanges;

#[derive(Debug, Parser)]
#[command(name = "inventory", version, about = "Building inventory registry")]
pub struct Cli {
    /// Config file (default: <config dir>/inventory-h8/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Item table to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log use case activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new item
    Register(RegisterArgs),

    /// Show one item by code
    Find {
        code: String,
    },

    /// Look up a code and show which inspection form applies
    Lookup {
        code: String,
    },

    /// Submit an inspection: updates a registered item, registers an unknown one
    Inspect {
        code: String,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of a registered item
    Update {
        code: String,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete items; without --yes only shows what would be removed
    Delete {
        #[arg(required = true, num_args = 1..)]
        codes: Vec<String>,

        /// Confirm the permanent deletion
        #[arg(long)]
        yes: bool,
    },

    /// List every item in stored order
    List,

    /// Read the item code from a photo of its tag
    Identify {
        #[arg(long, value_name = "PATH")]
        image: PathBuf,
    },

    /// Draft an inspection comment from a photo of the item
    DraftComment {
        #[arg(long, value_name = "PATH")]
        image: PathBuf,
    },

    /// Show the suggested status labels
    Statuses,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    pub code: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub status: String,

    #[arg(long, default_value = "")]
    pub comment: String,
}

/// Optional item fields; only the ones given are written.
#[derive(Debug, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,
}

impl From<FieldArgs> for ItemChanges {
    fn from(args: FieldArgs) -> Self {
        ItemChanges {
            name: args.name,
            location: args.location,
            status: args.status,
            comment: args.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "inventory",
            "find",
            "0042",
            "--json",
            "--data-file",
            "/tmp/items.csv",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/items.csv")));
        assert!(matches!(cli.command, Command::Find { ref code } if code == "0042"));
    }

    #[test]
    fn test_update_collects_only_given_fields() {
        let cli = Cli::try_parse_from([
            "inventory",
            "update",
            "0042",
            "--status",
            "in repair",
            "--comment",
            "torn fabric",
        ])
        .unwrap();

        let Command::Update { code, fields } = cli.command else {
            panic!("expected update");
        };
        let changes = ItemChanges::from(fields);
        assert_eq!(code, "0042");
        assert_eq!(changes.status.as_deref(), Some("in repair"));
        assert_eq!(changes.comment.as_deref(), Some("torn fabric"));
        assert!(changes.name.is_none());
    }

    #[test]
    fn test_delete_requires_a_code() {
        assert!(Cli::try_parse_from(["inventory", "delete", "--yes"]).is_err());

        let cli = Cli::try_parse_from(["inventory", "delete", "1", "3"]).unwrap();
        assert!(matches!(cli.command, Command::Delete { ref codes, yes: false } if codes.len() == 2));
    }

    #[test]
    fn test_register_keeps_code_as_text() {
        let cli = Cli::try_parse_from([
            "inventory", "register", "0042", "--name", "Sofa", "--location", "12B", "--status",
            "in use",
        ])
        .unwrap();

        let Command::Register(args) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(args.code, "0042");
        assert!(args.comment.is_empty());
    }
}
