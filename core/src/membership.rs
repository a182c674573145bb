//! The member register.
//!
//! Owns every [`Member`]. Circulation records who holds what through
//! [`Membership::attach_book`] and [`Membership::detach_book`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use libra_common::error::{ConflictReason, LibraryError, LibraryResult};
use libra_common::models::id::{BookId, IdSequence, UserId};
use libra_common::models::member::{Member, MemberUpdate, NewMember};

use crate::{search, validate};

#[derive(Debug)]
pub struct Membership {
    members: BTreeMap<UserId, Member>,
    ids: IdSequence,
    default_borrow_limit: usize,
}

impl Membership {
    pub fn new(default_borrow_limit: usize) -> Self {
        Self {
            members: BTreeMap::new(),
            ids: IdSequence::new(),
            default_borrow_limit,
        }
    }

    /// Registers an active member with the default borrow limit.
    pub fn add_user(&mut self, new: NewMember, now: DateTime<Utc>) -> LibraryResult<UserId> {
        validate::required("name", &new.name)?;
        validate::required("surname", &new.surname)?;

        let id = UserId::new(self.ids.next_raw()?);
        let member = Member {
            id,
            name: new.name,
            surname: new.surname,
            birth_year: new.birth_year,
            phone: new.phone,
            email: new.email,
            active: true,
            borrow_limit: self.default_borrow_limit,
            borrowed: Vec::new(),
            registered_at: now,
        };
        self.members.insert(id, member);
        Ok(id)
    }

    /// Drops a member. Fails while the member still holds books.
    pub fn remove_user(&mut self, id: UserId) -> LibraryResult<Member> {
        if !self.get(id)?.borrowed.is_empty() {
            return Err(ConflictReason::MemberHasLoans.into());
        }
        self.members
            .remove(&id)
            .ok_or_else(|| LibraryError::user_not_found(id))
    }

    /// Applies the supplied fields. Nothing changes if any of them is invalid.
    pub fn update_user(&mut self, id: UserId, update: MemberUpdate) -> LibraryResult<&Member> {
        self.get(id)?;
        if let Some(name) = &update.name {
            validate::required("name", name)?;
        }
        if let Some(surname) = &update.surname {
            validate::required("surname", surname)?;
        }

        let member = self.get_mut(id)?;
        if let Some(limit) = update.borrow_limit {
            if limit < member.borrowed.len() {
                return Err(LibraryError::validation(
                    "borrow limit",
                    format!(
                        "{limit} is below the {} books currently held",
                        member.borrowed.len()
                    ),
                ));
            }
        }

        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(surname) = update.surname {
            member.surname = surname;
        }
        if let Some(year) = update.birth_year {
            member.birth_year = year;
        }
        if let Some(phone) = update.phone {
            member.phone = phone;
        }
        if let Some(email) = update.email {
            member.email = email;
        }
        if let Some(active) = update.active {
            member.active = active;
        }
        if let Some(limit) = update.borrow_limit {
            member.borrow_limit = limit;
        }
        Ok(&*member)
    }

    pub fn get(&self, id: UserId) -> LibraryResult<&Member> {
        self.members
            .get(&id)
            .ok_or_else(|| LibraryError::user_not_found(id))
    }

    /// Members whose name, surname or full name (either order) contain
    /// `query`, ignoring case, ordered by id. A blank query matches nothing.
    pub fn find_users(&self, query: &str) -> Vec<&Member> {
        let Some(needle) = search::needle(query) else {
            return Vec::new();
        };

        self.members
            .values()
            .filter(|member| {
                search::contains(&member.name, &needle)
                    || search::contains(&member.surname, &needle)
                    || search::contains(&member.full_name(), &needle)
                    || search::contains(&format!("{} {}", member.surname, member.name), &needle)
            })
            .collect()
    }

    /// Every member, ordered by id. Clone the iterator to walk it again.
    pub fn list_users(&self) -> impl Iterator<Item = &Member> + Clone + '_ {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn attach_book(&mut self, id: UserId, book: BookId) -> LibraryResult<()> {
        let member = self.get_mut(id)?;
        if member.holds(book) {
            return Err(ConflictReason::AlreadyBorrowed.into());
        }
        if !member.has_capacity() {
            return Err(LibraryError::LimitExceeded {
                user: id,
                limit: member.borrow_limit,
            });
        }
        member.borrowed.push(book);
        Ok(())
    }

    pub(crate) fn detach_book(&mut self, id: UserId, book: BookId) -> LibraryResult<()> {
        let member = self.get_mut(id)?;
        member.borrowed.retain(|held| *held != book);
        Ok(())
    }

    fn get_mut(&mut self, id: UserId) -> LibraryResult<&mut Member> {
        self.members
            .get_mut(&id)
            .ok_or_else(|| LibraryError::user_not_found(id))
    }
}

impl Default for Membership {
    fn default() -> Self {
        Self::new(7)
    }
}
