//! Static sidebar content: navigation, projects, recent chats, user menu.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub initials: &'static str,
    pub plan: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarContent {
    pub brand_initial: &'static str,
    pub new_chat_label: &'static str,
    pub navigation: &'static [&'static str],
    pub projects: &'static [&'static str],
    pub recent_chats: &'static [&'static str],
    pub view_all_label: &'static str,
    pub user: UserProfile,
    pub user_menu: &'static [UserMenuItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    Profile,
    Settings,
    Logout,
}

impl UserMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Logout => "Logout",
        }
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Logout)
    }
}

impl SidebarContent {
    pub fn standard() -> Self {
        Self {
            brand_initial: "O",
            new_chat_label: "New Chat",
            navigation: &["Community", "Project", "Feedback"],
            projects: &[
                "AI-Powered code genaration",
                "Task Management app",
                "Website design",
            ],
            recent_chats: &[
                "AI-Powered code genaration",
                "Task Management app",
                "Website design",
                "Futuristic dashboard",
                "Design a car website",
            ],
            view_all_label: "View All",
            user: UserProfile {
                name: "mithuncy",
                initials: "CY",
                plan: "Premium",
            },
            user_menu: &[
                UserMenuItem::Profile,
                UserMenuItem::Settings,
                UserMenuItem::Logout,
            ],
        }
    }
}

impl Default for SidebarContent {
    fn default() -> Self {
        Self::standard()
    }
}
