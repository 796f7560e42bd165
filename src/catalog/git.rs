//! Git command reference categories.

use super::{Catalog, Table, Topic};

/// Build the git command catalog.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.register(Topic {
        name: "Basic Git Commands",
        tables: vec![Table {
            title: "Basic Git Commands",
            columns: &["Command", "Description"],
            rows: &[
                &["git init", "Initialize a new Git repository in the current directory"],
                &["git clone <url>", "Clone a remote repository to your local machine"],
                &["git add <file>", "Add a specific file to the staging area"],
                &["git commit -m \"message\"", "Commit staged changes with a message"],
                &["git status", "Show the working tree status"],
            ],
        }],
    });

    catalog.register(Topic {
        name: "Branch Management",
        tables: vec![Table {
            title: "Branch Management",
            columns: &["Command", "Description"],
            rows: &[
                &["git branch", "List all local branches"],
                &["git checkout <branch>", "Switch to a branch"],
                &["git checkout -b <name>", "Create and switch to a new branch"],
                &["git merge <branch>", "Merge a branch into current branch"],
            ],
        }],
    });

    catalog.register(Topic {
        name: "Remote Repository",
        tables: vec![Table {
            title: "Remote Repository",
            columns: &["Command", "Description"],
            rows: &[
                &["git remote", "List all remotes by name"],
                &["git remote -v", "List remote repositories with URLs"],
                &["git remote add <name> <url>", "Add a new remote repository"],
                &["git remote remove <name>", "Remove a remote repository"],
                &["git remote rename <old> <new>", "Rename a remote repository"],
                &["git remote set-url <name> <url>", "Change the URL of a remote"],
                &["git fetch", "Download objects and refs from another repository"],
                &["git fetch <remote>", "Fetch from a specific remote"],
                &["git fetch --all", "Fetch from all remotes"],
                &["git push", "Push commits to the default remote"],
                &["git push <remote> <branch>", "Push a branch to a specific remote"],
                &["git push -u <remote> <branch>", "Push and set upstream for the branch"],
                &["git pull", "Fetch and merge changes from the default remote"],
                &["git pull <remote> <branch>", "Fetch and merge from a specific remote branch"],
            ],
        }],
    });

    catalog
}
