use colored::*;
use libra_common::config::Config;
use libra_common::error::LibraryResult;
use libra_common::models::member::{Member, MemberUpdate, NewMember};
use libra_core::Library;
use tracing::{debug, info, warn};

use crate::commands::MemberAction;
use crate::mprint;
use crate::terminal::{format, print};

pub fn run(action: MemberAction, library: &mut Library, cfg: &Config) -> LibraryResult<()> {
    match action {
        MemberAction::Add {
            name,
            surname,
            birth_year,
            phone,
            email,
        } => {
            let id = library.add_user(NewMember::new(name, surname, birth_year, phone, email))?;
            info!("Member registered with id {}", id.to_string().bold());
        }
        MemberAction::Remove { id } => {
            let removed = library.remove_user(id)?;
            info!("Removed member {} ({id})", removed.full_name());
        }
        MemberAction::Update {
            id,
            name,
            surname,
            birth_year,
            phone,
            email,
            active,
            limit,
        } => {
            let update = MemberUpdate {
                name,
                surname,
                birth_year,
                phone,
                email,
                active,
                borrow_limit: limit,
            };
            if update.is_empty() {
                warn!("Nothing to update for member {id}");
                return Ok(());
            }
            let member = library.update_user(id, update)?;
            info!("Member {id} updated");
            print_members(&[member], cfg);
        }
        MemberAction::Find { query } => {
            let query = query.join(" ");
            let found = library.find_users(&query);
            debug!(query = %query, hits = found.len(), "member search");
            print::header(&format!("members matching \"{query}\""), cfg.quiet);
            print_members(&found, cfg);
        }
        MemberAction::List => {
            let members: Vec<&Member> = library.list_users().collect();
            print::header("members", cfg.quiet);
            print_members(&members, cfg);
        }
        MemberAction::Show { id } => {
            let member = library.user(id)?;
            print_members(&[member], cfg);

            let history: Vec<_> = library.loans_of(id).collect();
            if !history.is_empty() {
                mprint!();
                print::header("borrowing history", cfg.quiet);
                super::circulation::print_loans(&history, library, cfg);
            }
        }
    }
    Ok(())
}

pub fn print_members(members: &[&Member], cfg: &Config) {
    if members.is_empty() {
        print::no_results("members");
        return;
    }

    for (idx, member) in members.iter().enumerate() {
        match cfg.quiet {
            0 => {
                print::tree_head(member.id, &member.full_name());
                print::as_tree_one_level(format::member_to_details(member));
                if idx + 1 != members.len() {
                    mprint!();
                }
            }
            _ => print::print_status(format!(
                "[{}] {} | {} | {} | {}/{} books",
                member.id,
                member.full_name(),
                member.phone,
                member.email,
                member.borrowed.len(),
                member.borrow_limit
            )),
        }
    }
}
