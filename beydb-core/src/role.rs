/// Which front end a session is running as.
///
/// A user may only log in to the front end matching their `is_admin` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Client,
}

impl Role {
    /// Role a stored `is_admin` flag maps to.
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::Client }
    }

    /// Name shown in login banners and rejections.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Admin => "BeyAdmin",
            Self::Client => "BeyClient",
        }
    }

    /// Farewell line printed when the operator quits.
    pub fn farewell(&self) -> &'static str {
        match self {
            Self::Admin => {
                "Thank you for managing our community of Bladers. Goodbye, and keep spinning forward!"
            }
            Self::Client => {
                "Thank you for keeping the Beyblade legacy ablaze. May the Beyblade spirit be with you. Goodbye!"
            }
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
