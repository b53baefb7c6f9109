/// Which directions of a friendship existed before a mutation touched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeState {
    pub user_has_friend: bool,
    pub friend_has_user: bool,
}

impl EdgeState {
    pub fn is_mutual(&self) -> bool {
        self.user_has_friend && self.friend_has_user
    }

    pub fn is_absent(&self) -> bool {
        !self.user_has_friend && !self.friend_has_user
    }

    pub fn is_asymmetric(&self) -> bool {
        self.user_has_friend != self.friend_has_user
    }
}
