use std::cell::Cell;

thread_local! {
    static PINNED: Cell<bool> = Cell::new(false);
}

/// Pins the calling thread to the third core, once per thread. Machines with fewer cores run
/// unpinned.
pub fn pin_thread_to_core() {
    const CORE_INDEX: usize = 2;

    if PINNED.with(Cell::get) {
        return;
    }

    if let Some(core) = core_affinity::get_core_ids().and_then(|ids| ids.get(CORE_INDEX).copied())
    {
        core_affinity::set_for_current(core);
    }

    PINNED.with(|pinned| pinned.set(true));
}
