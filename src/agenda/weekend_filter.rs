use crate::agenda::model::Event;
use crate::dates::week_window::WeekWindow;

/// Keeps the events dated exactly on the window's Friday or Saturday, in their original order.
pub fn filter_to_window(events: Vec<Event>, window: &WeekWindow) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| window.contains(event.event_date))
        .collect()
}
