use crate::database::share::SharePermission;

/// A user's effective standing on one album.
///
/// Ownership beats everything. A share grant carries its own level and
/// is kept distinct from public visibility, which allows viewing and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumAccess {
    /// The user owns the album.
    Owner,
    /// The user holds an explicit share grant at this level.
    Granted(SharePermission),
    /// No grant, but the album is publicly visible.
    PublicView,
    /// No relationship to the album at all.
    None,
}

impl AlbumAccess {
    pub fn is_owner(self) -> bool {
        matches!(self, AlbumAccess::Owner)
    }

    pub fn can_view(self) -> bool {
        !matches!(self, AlbumAccess::None)
    }

    pub fn can_comment(self) -> bool {
        match self {
            AlbumAccess::Owner => true,
            AlbumAccess::Granted(permission) => permission >= SharePermission::Comment,
            AlbumAccess::PublicView | AlbumAccess::None => false,
        }
    }

    pub fn can_add_photos(self) -> bool {
        match self {
            AlbumAccess::Owner => true,
            AlbumAccess::Granted(permission) => permission >= SharePermission::Add,
            AlbumAccess::PublicView | AlbumAccess::None => false,
        }
    }

    /// Label used in album detail responses.
    pub fn as_str(self) -> &'static str {
        match self {
            AlbumAccess::Owner => "owner",
            AlbumAccess::Granted(SharePermission::View) => "view",
            AlbumAccess::Granted(SharePermission::Comment) => "comment",
            AlbumAccess::Granted(SharePermission::Add) => "add",
            AlbumAccess::PublicView => "public",
            AlbumAccess::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_can_do_everything() {
        let access = AlbumAccess::Owner;
        assert!(access.is_owner());
        assert!(access.can_view());
        assert!(access.can_comment());
        assert!(access.can_add_photos());
    }

    #[test]
    fn grant_levels_are_cumulative() {
        let view = AlbumAccess::Granted(SharePermission::View);
        assert!(view.can_view());
        assert!(!view.can_comment());
        assert!(!view.can_add_photos());

        let comment = AlbumAccess::Granted(SharePermission::Comment);
        assert!(comment.can_view());
        assert!(comment.can_comment());
        assert!(!comment.can_add_photos());

        let add = AlbumAccess::Granted(SharePermission::Add);
        assert!(add.can_view());
        assert!(add.can_comment());
        assert!(add.can_add_photos());
        assert!(!add.is_owner());
    }

    #[test]
    fn public_visibility_only_grants_viewing() {
        let access = AlbumAccess::PublicView;
        assert!(access.can_view());
        assert!(!access.can_comment());
        assert!(!access.can_add_photos());
        assert!(!access.is_owner());
    }

    #[test]
    fn no_relationship_grants_nothing() {
        let access = AlbumAccess::None;
        assert!(!access.can_view());
        assert!(!access.can_comment());
        assert!(!access.can_add_photos());
    }

    #[test]
    fn wire_labels() {
        assert_eq!(AlbumAccess::Owner.as_str(), "owner");
        assert_eq!(AlbumAccess::Granted(SharePermission::Comment).as_str(), "comment");
        assert_eq!(AlbumAccess::PublicView.as_str(), "public");
        assert_eq!(AlbumAccess::None.as_str(), "none");
    }
}
