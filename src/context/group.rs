use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

use smallvec::{smallvec, SmallVec};

/// Tag selecting which validators apply to a call.
///
/// Groups form a hierarchy: a group is compatible with itself and with every
/// group it (transitively) extends. Identity is the name.
///
/// ```
/// use guard_rail::Group;
///
/// const CREATE: Group = Group::new("Create");
/// const ADMIN_CREATE: Group = Group::extending("AdminCreate", &[&CREATE]);
///
/// assert!(ADMIN_CREATE.is_compatible_with(&CREATE));
/// assert!(!CREATE.is_compatible_with(&ADMIN_CREATE));
/// ```
#[derive(Clone, Copy)]
pub struct Group {
    name: &'static str,
    parents: &'static [&'static Group],
}

impl Group {
    /// The group used when a validator declares none.
    pub const DEFAULT: Group = Group::new("Default");

    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name, parents: &[] }
    }

    #[inline]
    pub const fn extending(name: &'static str, parents: &'static [&'static Group]) -> Self {
        Self { name, parents }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn parents(&self) -> &'static [&'static Group] {
        self.parents
    }

    /// `true` when `self` is `required` or extends it.
    ///
    /// Each ancestor is visited once, so a hierarchy that loops back on
    /// itself terminates.
    pub fn is_compatible_with(&self, required: &Group) -> bool {
        if self == required {
            return true;
        }
        let mut seen: SmallVec<[&'static str; 4]> = smallvec![self.name];
        let mut pending: SmallVec<[&'static Group; 4]> = self.parents.iter().copied().collect();
        while let Some(group) = pending.pop() {
            if group == required {
                return true;
            }
            if !seen.contains(&group.name) {
                seen.push(group.name);
                pending.extend(group.parents.iter().copied());
            }
        }
        false
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Group {}

impl Hash for Group {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parents: SmallVec<[&str; 4]> = self.parents.iter().map(|parent| parent.name).collect();
        f.debug_struct("Group").field("name", &self.name).field("parents", &parents).finish()
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
