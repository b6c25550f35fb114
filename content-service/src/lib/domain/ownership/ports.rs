use async_trait::async_trait;

use super::errors::OwnershipError;
use super::models::ResourceRef;
use crate::domain::user::models::Identity;

/// Port answering "does this identity own the journey rooting this resource?"
#[async_trait]
pub trait OwnershipPort: Send + Sync + 'static {
    /// # Returns
    /// `true` iff the root journey's creator is `identity.user_id`
    ///
    /// # Errors
    /// * `NotFound` - The resource or one of its ancestors does not exist
    /// * `Timeout` - A lookup did not answer in time
    /// * `Repository` - A lookup failed
    async fn owns(&self, identity: &Identity, resource: ResourceRef)
        -> Result<bool, OwnershipError>;
}
