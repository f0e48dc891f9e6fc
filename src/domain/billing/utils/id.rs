use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// Identifier tagged with the kind of entity it names.
///
/// Naming functions take these instead of bare strings so that a project can
/// never be passed where an endpoint is expected.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub id: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Id { id: id.into(), _marker: PhantomData }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> From<&str> for Id<T> {
    fn from(id: &str) -> Self {
        Id::new(id)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ServiceBaseNameTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ProjectTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct EndpointTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct UserTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ExploratoryTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ComputationalTag;

// Physical cloud resource, as named in the provider's billing feed.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ResourceTag;

pub type ServiceBaseName = Id<ServiceBaseNameTag>;
pub type ProjectName = Id<ProjectTag>;
pub type EndpointName = Id<EndpointTag>;
pub type UserName = Id<UserTag>;
pub type ExploratoryId = Id<ExploratoryTag>;
pub type ComputationalId = Id<ComputationalTag>;
pub type ResourceId = Id<ResourceTag>;
