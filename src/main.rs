use anyhow::Result;
use clap::{Parser, Subcommand};
use dirc::areas::repository::Repository;
use dirc::commands::checkout_index::CheckoutIndexOptions;
use dirc::commands::ls_files::{LsFilesMode, LsFilesOptions};
use dirc::commands::ls_tree::LsTreeOptions;

#[derive(Parser)]
#[command(
    name = "dirc",
    version = "0.1.0",
    about = "Plumbing for a git-style object store and staging index",
    long_about = "Read/write plumbing for a git-style repository: a loose object \
    database addressed by SHA-1, a read-only view of the binary staging index, \
    and tree object listing. Nothing here is porcelain; every command maps to \
    one low-level operation.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "ls-files",
        about = "List staged files from the index",
        long_about = "This command lists index entries. The default (and --cached) prints \
        pathnames; --stage adds mode bits, object names and stage numbers; --deleted and \
        --modified compare entries against the working tree; --others prints untracked files."
    )]
    LsFiles {
        #[arg(short = 'c', long, help = "Show tracked pathnames (the default)")]
        cached: bool,
        #[arg(
            short = 's',
            long,
            help = "Show mode bits, object name and stage number per entry"
        )]
        stage: bool,
        #[arg(short = 'd', long, help = "Show files with an unstaged deletion")]
        deleted: bool,
        #[arg(
            short = 'm',
            long,
            help = "Show files with an unstaged modification (deletions count)"
        )]
        modified: bool,
        #[arg(short = 'o', long, help = "Show untracked files")]
        others: bool,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Truncate object names to <n> hex digits; 0 or less keeps all 40"
        )]
        abbrev: Option<i32>,
        #[arg(long, help = "Interpolate %(fieldname) placeholders per entry")]
        format: Option<String>,
        #[arg(long, help = "Append cache metadata after each line")]
        debug: bool,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree object, named by digest or \
        unique prefix. A commit resolves to its root tree. -r recurses into sub-trees."
    )]
    LsTree {
        #[arg(short = 'r', help = "Recurse into sub-trees")]
        recursive: bool,
        #[arg(short = 'd', help = "Show only tree entries")]
        trees_only: bool,
        #[arg(short = 't', help = "Show tree entries even when recursing")]
        show_trees: bool,
        #[arg(long, help = "List only pathnames")]
        name_only: bool,
        #[arg(long, help = "List only object names")]
        object_only: bool,
        #[arg(
            short = 'l',
            long = "long",
            help = "Include the size declared in each blob's header"
        )]
        long_format: bool,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Truncate object names to <n> hex digits; 0 or less keeps all 40"
        )]
        abbrev: Option<i32>,
        #[arg(index = 1, help = "Tree (or commit) digest or unique prefix")]
        treeish: String,
    },
    #[command(
        name = "cat-file",
        about = "Show a stored object",
        long_about = "This command prints a stored object's payload (-p, the default), its \
        kind tag (-t), or the size its header declares (-s). The object may be named by a \
        unique digest prefix of at least two characters."
    )]
    CatFile {
        #[arg(short = 'p', help = "Print the object payload (the default)")]
        print: bool,
        #[arg(short = 't', help = "Print the object kind")]
        kind: bool,
        #[arg(short = 's', help = "Print the size declared in the object header")]
        size: bool,
        #[arg(index = 1, help = "Object digest or unique prefix")]
        object: String,
    },
    #[command(
        name = "hash-object",
        about = "Compute object IDs and optionally store the objects",
        long_about = "This command frames each input as `<kind> <len>\\0<payload>`, prints \
        the SHA-1 of the frame, and with -w stores the compressed frame in the object \
        database."
    )]
    HashObject {
        #[arg(short = 'w', long, help = "Write the object into the object database")]
        write: bool,
        #[arg(
            short = 't',
            default_value = "blob",
            help = "Kind tag to frame with (not validated)"
        )]
        kind: String,
        #[arg(long, help = "Hash standard input before any named files")]
        stdin: bool,
        #[arg(index = 1, num_args = 0.., help = "Files to hash")]
        files: Vec<String>,
    },
    #[command(
        name = "mktag",
        about = "Store a tag object read from standard input"
    )]
    MkTag,
    #[command(
        name = "checkout-index",
        about = "Copy staged blobs into the working tree",
        long_about = "This command materializes index entries as files. Existing files are \
        reported and never overwritten. --prefix is prepended to each entry's pathname by \
        plain string concatenation."
    )]
    CheckoutIndex {
        #[arg(short = 'a', long, help = "Check out every entry in the index")]
        all: bool,
        #[arg(long, help = "Prepend <prefix> to every written path")]
        prefix: Option<String>,
        #[arg(index = 1, num_args = 0.., help = "Staged pathnames to check out")]
        files: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::LsFiles {
            cached,
            stage,
            deleted,
            modified,
            others,
            abbrev,
            format,
            debug,
        } => {
            let mode = if *stage {
                LsFilesMode::Stage
            } else if *cached {
                LsFilesMode::Cached
            } else if *modified {
                LsFilesMode::Modified
            } else if *deleted {
                LsFilesMode::Deleted
            } else if *others {
                LsFilesMode::Others
            } else {
                LsFilesMode::Cached
            };

            repository.ls_files(
                mode,
                &LsFilesOptions {
                    abbrev: *abbrev,
                    format: format.clone(),
                    debug: *debug,
                },
            )?
        }
        Commands::LsTree {
            recursive,
            trees_only,
            show_trees,
            name_only,
            object_only,
            long_format,
            abbrev,
            treeish,
        } => repository.ls_tree(
            treeish,
            &LsTreeOptions {
                recursive: *recursive,
                trees_only: *trees_only,
                show_trees: *show_trees,
                name_only: *name_only,
                object_only: *object_only,
                long_format: *long_format,
                abbrev: *abbrev,
            },
        )?,
        Commands::CatFile {
            print: _,
            kind,
            size,
            object,
        } => repository.cat_file(object, *kind, *size)?,
        Commands::HashObject {
            write,
            kind,
            stdin,
            files,
        } => repository.hash_object(kind, *write, *stdin, files)?,
        Commands::MkTag => repository.mk_tag()?,
        Commands::CheckoutIndex { all, prefix, files } => repository.checkout_index(
            &CheckoutIndexOptions {
                all: *all,
                prefix: prefix.clone(),
                files: files.clone(),
            },
        )?,
    }

    Ok(())
}
