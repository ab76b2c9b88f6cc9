use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ajo")]
#[command(
    about = "Open a recent file or a file in a folder ranked by autojump",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Default)]
pub struct GlobalArgs {
    #[arg(
        long,
        global = true,
        help = "Editor command to open the picked file with (default: print the path)"
    )]
    pub editor: Option<String>,

    #[arg(long, global = true, help = "Disable colors")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Pick a ranked or recent folder, then a file inside it")]
    Jump,

    #[command(about = "Pick a recently opened file")]
    Recent,

    #[command(about = "Record a file as opened or saved (editor hook)")]
    Record(PathArgs),

    #[command(about = "Remove a file from the recent list")]
    Forget(PathArgs),

    #[command(about = "List directories ranked by autojump")]
    Dirs(ListArgs),

    #[command(about = "List recent files, including session history")]
    List(ListArgs),

    #[command(about = "Create a default config file")]
    Init(InitArgs),
}

#[derive(Parser)]
pub struct PathArgs {
    #[arg(help = "File path")]
    pub file: String,
}

#[derive(Parser)]
pub struct ListArgs {
    #[arg(long, help = "Output format: text, json (default: text)")]
    pub format: Option<String>,
}

#[derive(Parser)]
pub struct InitArgs {
    #[arg(short, long, help = "Write the global config instead of ./.ajo.toml")]
    pub global: bool,

    #[arg(short, long, help = "Overwrite an existing config")]
    pub force: bool,
}

impl GlobalArgs {
    pub fn apply(&self, settings: &mut ajo::Settings) {
        if let Some(editor) = &self.editor {
            settings.editor = Some(editor.clone());
        }
        if self.no_color {
            settings.no_color = true;
        }
    }
}
