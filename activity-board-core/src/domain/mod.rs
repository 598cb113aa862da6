pub mod activity;
pub mod criteria;
pub mod notice;
pub mod snapshot;
pub mod view;

pub use activity::{Activity, ActivityName};
pub use criteria::{FilterCriteria, SortKey, UnknownSortKey};
pub use notice::{Notice, NoticeId, NoticeKind, NoticeSlot, NOTICE_DISMISS_DELAY};
pub use snapshot::Snapshot;
pub use view::{derive_view, ActivityView};
