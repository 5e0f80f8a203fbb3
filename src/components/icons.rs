//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuCheck as Save, LuGamepad2 as Games, LuHouse as Home,
        LuImage as Image, LuLogOut as Logout, LuPencil as Edit, LuPlus as Plus,
        LuTrash2 as Trash, LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as Back, BsBoxArrowRight as Logout, BsCheckLg as Save,
        BsController as Games, BsHouseFill as Home, BsImage as Image, BsPencil as Edit,
        BsPeople as Users, BsPlusLg as Plus, BsTrash as Trash,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(CLOSE, Close);
themed_icon!(EDIT, Edit);
themed_icon!(GAMES, Games);
themed_icon!(HOME, Home);
themed_icon!(IMAGE, Image);
themed_icon!(LOGOUT, Logout);
themed_icon!(PLUS, Plus);
themed_icon!(SAVE, Save);
themed_icon!(TRASH, Trash);
themed_icon!(USERS, Users);
