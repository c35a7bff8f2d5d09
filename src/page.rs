// Page lifecycle decisions for auto-mounted backgrounds.
//
// `pagehide` always tears everything down so no frame request or observer
// outlives the page. A page restored from the back/forward cache fires
// `pageshow` with `persisted == true` and gets its backgrounds mounted again.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Hide,
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    Nothing,
    UnmountAll,
    Remount,
}

/// `mounted` is the number of auto-mounted renderers currently alive.
pub fn transition(event: PageEvent, mounted: usize) -> PageAction {
    match event {
        PageEvent::Hide if mounted > 0 => PageAction::UnmountAll,
        PageEvent::Hide => PageAction::Nothing,
        // The first `pageshow` of a fresh load is not persisted; the start
        // function already mounted.
        PageEvent::Show { persisted: true } if mounted == 0 => PageAction::Remount,
        PageEvent::Show { .. } => PageAction::Nothing,
    }
}
