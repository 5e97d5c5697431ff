//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields, rebuilt every frame:
//! - `TitleBar`: endpoint, status, loading spinner
//! - `FlashcardView`: a single card, front or back
//! - `PagerBar`: previous/next controls and "Page X of Y"
//! - `NoticePopup`: modal failure / empty-result message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputPanel`: PDF path field and free-text area; emits `PanelEvent`s
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! PagerBar::new(app.pager.label(len), app.pager.can_prev(), app.pager.can_next(len))
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── input_panel/     (File path + free text)
//! ├── flashcard.rs     (Single card renderer)
//! ├── pager.rs         (Pagination controls)
//! └── notice.rs        (Modal notice overlay)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod flashcard;
pub mod input_panel;
pub mod notice;
pub mod pager;
pub use flashcard::FlashcardView;
pub use input_panel::{InputPanel, PanelEvent, PanelField};
pub use notice::NoticePopup;
pub use pager::PagerBar;
