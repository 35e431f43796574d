//! Booking forms and the schedule calendar.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use uuid::Uuid;

use crate::models::{MentoringSession, PersonRef, Role, ValidationError};

/// Bookable start times, one per hour.
pub const TIME_SLOTS: [&str; 9] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM",
    "04:00 PM", "05:00 PM",
];

pub const VIDEO_FOLLOW_UP: &str =
    "A meeting link will be sent to your email. Click it at the scheduled time to join.";

/// Parses a [`TIME_SLOTS`] label into a time of day.
pub fn slot_time(slot: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(slot, "%I:%M %p").ok()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum MeetingDuration {
    Fifteen,
    #[default]
    Thirty,
    FortyFive,
    Sixty,
}

impl MeetingDuration {
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Fifteen => 15,
            Self::Thirty => 30,
            Self::FortyFive => 45,
            Self::Sixty => 60,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            15 => Some(Self::Fifteen),
            30 => Some(Self::Thirty),
            45 => Some(Self::FortyFive),
            60 => Some(Self::Sixty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingKind {
    #[default]
    Video,
    Chat,
}

impl MeetingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Chat => "chat",
        }
    }
}

/// Which form produced the request; only the wording differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    /// "Schedule New Session" under the dashboard.
    Session,
    /// The standalone "Schedule a Meeting" page.
    #[default]
    Meeting,
}

impl BookingKind {
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Meeting => "meeting",
        }
    }
}

/// Form state of a booking request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub booking: BookingKind,
    pub role: Role,
    pub date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub duration: MeetingDuration,
    pub kind: MeetingKind,
    pub topic: String,
    pub agenda: String,
    /// Named counterpart when the form was opened for a specific person.
    pub counterpart: Option<PersonRef>,
}

/// A successfully validated booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMeeting {
    pub meeting_id: Uuid,
    pub booking: BookingKind,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub time_slot: String,
    pub duration: MeetingDuration,
    pub kind: MeetingKind,
    pub topic: String,
    pub agenda: String,
    /// Counterpart name, or the counterpart role label when none was chosen.
    pub with: String,
}

impl MeetingRequest {
    pub fn new(booking: BookingKind, role: Role) -> Self {
        Self {
            booking,
            role,
            ..Self::default()
        }
    }

    /// Validates the form. Nothing is mutated on failure.
    pub fn submit(&self, today: NaiveDate) -> Result<ScheduledMeeting, ValidationError> {
        let (Some(date), Some(slot)) = (self.date, self.time_slot.as_deref()) else {
            return Err(ValidationError::MissingDateOrTime);
        };
        let start = slot_time(slot).ok_or(ValidationError::MissingDateOrTime)?;
        if date < today {
            return Err(ValidationError::DateInPast(date));
        }
        let with = self.counterpart.as_ref().map_or_else(
            || self.role.counterpart().label().to_string(),
            |person| person.name.clone(),
        );
        let scheduled = ScheduledMeeting {
            meeting_id: Uuid::new_v4(),
            booking: self.booking,
            date,
            start,
            time_slot: slot.to_string(),
            duration: self.duration,
            kind: self.kind,
            topic: self.topic.trim().to_string(),
            agenda: self.agenda.trim().to_string(),
            with,
        };
        tracing::info!(
            meeting = %scheduled.meeting_id,
            date = %scheduled.date,
            slot = %scheduled.time_slot,
            "{} scheduled",
            self.booking.noun()
        );
        Ok(scheduled)
    }
}

impl ScheduledMeeting {
    /// Toast title, e.g. "Meeting scheduled successfully!".
    pub fn title(&self) -> String {
        let noun = self.booking.noun();
        let mut chars = noun.chars();
        let capitalized: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{capitalized} scheduled successfully!")
    }

    /// "Your 30 minutes video meeting is set for Tuesday, April 15th, 2025 at 10:00 AM."
    ///
    /// Sessions booked with a named person also mention who they are with.
    pub fn confirmation(&self) -> String {
        let with = match self.booking {
            BookingKind::Session => format!(" with {}", self.with),
            BookingKind::Meeting => String::new(),
        };
        format!(
            "Your {} minutes {} {}{with} is set for {} at {}.",
            self.duration.minutes(),
            self.kind.as_str(),
            self.booking.noun(),
            long_date(self.date),
            self.time_slot
        )
    }

    /// Extra notice shown after booking a video call.
    pub fn follow_up(&self) -> Option<&'static str> {
        (self.kind == MeetingKind::Video).then_some(VIDEO_FOLLOW_UP)
    }
}

/// "Tuesday, April 15th, 2025".
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!("{}, {} {day}{suffix}, {}", date.format("%A"), date.format("%B"), date.year())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum CalendarView {
    #[default]
    Week,
    Month,
    List,
}

impl CalendarView {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::List => "List",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// View state of the schedule page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCalendar {
    pub view: CalendarView,
    pub anchor: NaiveDate,
}

impl ScheduleCalendar {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            view: CalendarView::default(),
            anchor,
        }
    }

    /// Moves a week or a month. The list view has no paging.
    pub fn navigate(&mut self, step: Step) {
        let moved = match (self.view, step) {
            (CalendarView::Week, Step::Next) => self.anchor.checked_add_days(Days::new(7)),
            (CalendarView::Week, Step::Previous) => self.anchor.checked_sub_days(Days::new(7)),
            (CalendarView::Month, Step::Next) => self.anchor.checked_add_months(Months::new(1)),
            (CalendarView::Month, Step::Previous) => {
                self.anchor.checked_sub_months(Months::new(1))
            }
            (CalendarView::List, _) => None,
        };
        if let Some(anchor) = moved {
            self.anchor = anchor;
        }
    }

    /// Heading above the calendar, e.g. "April 2025".
    pub fn title(&self) -> String {
        self.anchor.format("%B %Y").to_string()
    }

    /// Monday through Sunday of the anchor's week.
    pub fn week_days(&self) -> Vec<NaiveDate> {
        let monday = self.anchor.week(chrono::Weekday::Mon).first_day();
        monday.iter_days().take(7).collect()
    }

    /// Whether `date` falls in the period currently on screen.
    pub fn shows(&self, date: NaiveDate) -> bool {
        match self.view {
            CalendarView::Week => {
                let week = self.anchor.week(chrono::Weekday::Mon);
                date >= week.first_day() && date <= week.last_day()
            }
            CalendarView::Month => {
                date.year() == self.anchor.year() && date.month() == self.anchor.month()
            }
            CalendarView::List => true,
        }
    }
}

/// Sessions sorted by date, then start time.
pub fn sessions_in_order(sessions: &[MentoringSession]) -> Vec<&MentoringSession> {
    let mut ordered: Vec<_> = sessions.iter().collect();
    ordered.sort_by_key(|session| session.starts_at());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SessionKind, SessionStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled(booking: BookingKind) -> MeetingRequest {
        MeetingRequest {
            date: Some(date(2025, 4, 15)),
            time_slot: Some("10:00 AM".into()),
            ..MeetingRequest::new(booking, Role::Mentee)
        }
    }

    #[test]
    fn test_submit_requires_date_and_time() {
        let today = date(2025, 4, 1);
        let mut request = MeetingRequest::new(BookingKind::Meeting, Role::Mentee);
        assert_eq!(request.submit(today), Err(ValidationError::MissingDateOrTime));
        request.date = Some(date(2025, 4, 15));
        assert_eq!(request.submit(today), Err(ValidationError::MissingDateOrTime));
        request.time_slot = Some("25:00".into());
        assert_eq!(request.submit(today), Err(ValidationError::MissingDateOrTime));
    }

    #[test]
    fn test_submit_rejects_past_dates() {
        let request = filled(BookingKind::Meeting);
        assert_eq!(
            request.submit(date(2025, 4, 16)),
            Err(ValidationError::DateInPast(date(2025, 4, 15)))
        );
        assert!(request.submit(date(2025, 4, 15)).is_ok());
    }

    #[test]
    fn test_meeting_confirmation() {
        let scheduled = filled(BookingKind::Meeting).submit(date(2025, 4, 1)).unwrap();
        assert_eq!(scheduled.title(), "Meeting scheduled successfully!");
        assert_eq!(
            scheduled.confirmation(),
            "Your 30 minutes video meeting is set for Tuesday, April 15th, 2025 at 10:00 AM."
        );
        assert_eq!(scheduled.follow_up(), Some(VIDEO_FOLLOW_UP));
        assert_eq!(scheduled.start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn test_session_confirmation_names_counterpart() {
        let mut request = filled(BookingKind::Session);
        request.kind = MeetingKind::Chat;
        request.duration = MeetingDuration::Sixty;
        let scheduled = request.submit(date(2025, 4, 1)).unwrap();
        assert_eq!(scheduled.with, "Mentor");
        assert_eq!(scheduled.follow_up(), None);

        request.counterpart = Some(PersonRef {
            id: "2".into(),
            name: "Michael Chen".into(),
        });
        let scheduled = request.submit(date(2025, 4, 1)).unwrap();
        assert_eq!(scheduled.title(), "Session scheduled successfully!");
        assert_eq!(
            scheduled.confirmation(),
            "Your 60 minutes chat session with Michael Chen is set for Tuesday, April 15th, 2025 at 10:00 AM."
        );
    }

    #[test]
    fn test_every_submit_gets_a_fresh_id() {
        let request = filled(BookingKind::Meeting);
        let today = date(2025, 4, 1);
        assert_ne!(
            request.submit(today).unwrap().meeting_id,
            request.submit(today).unwrap().meeting_id
        );
    }

    #[test]
    fn test_long_date_ordinals() {
        assert_eq!(long_date(date(2025, 4, 1)), "Tuesday, April 1st, 2025");
        assert_eq!(long_date(date(2025, 4, 2)), "Wednesday, April 2nd, 2025");
        assert_eq!(long_date(date(2025, 4, 3)), "Thursday, April 3rd, 2025");
        assert_eq!(long_date(date(2025, 4, 11)), "Friday, April 11th, 2025");
        assert_eq!(long_date(date(2025, 4, 22)), "Tuesday, April 22nd, 2025");
    }

    #[test]
    fn test_time_slots_parse() {
        let times: Vec<_> = TIME_SLOTS.iter().filter_map(|slot| slot_time(slot)).collect();
        assert_eq!(times.len(), TIME_SLOTS.len());
        assert_eq!(times[3], NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(times[8], NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(MeetingDuration::default().minutes(), 30);
        assert_eq!(MeetingDuration::from_minutes(45), Some(MeetingDuration::FortyFive));
        assert_eq!(MeetingDuration::from_minutes(20), None);
    }

    #[test]
    fn test_calendar_navigation() {
        let mut calendar = ScheduleCalendar::new(date(2025, 4, 15));
        calendar.navigate(Step::Next);
        assert_eq!(calendar.anchor, date(2025, 4, 22));

        calendar.view = CalendarView::Month;
        calendar.navigate(Step::Previous);
        assert_eq!(calendar.anchor, date(2025, 3, 22));
        assert_eq!(calendar.title(), "March 2025");

        calendar.view = CalendarView::List;
        calendar.navigate(Step::Next);
        assert_eq!(calendar.anchor, date(2025, 3, 22));
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        let mut calendar = ScheduleCalendar::new(date(2025, 1, 31));
        calendar.view = CalendarView::Month;
        calendar.navigate(Step::Next);
        assert_eq!(calendar.anchor, date(2025, 2, 28));
    }

    #[test]
    fn test_week_days_and_visibility() {
        let calendar = ScheduleCalendar::new(date(2025, 4, 16));
        let days = calendar.week_days();
        assert_eq!(days.first(), Some(&date(2025, 4, 14)));
        assert_eq!(days.last(), Some(&date(2025, 4, 20)));
        assert!(calendar.shows(date(2025, 4, 20)));
        assert!(!calendar.shows(date(2025, 4, 21)));
    }

    #[test]
    fn test_sessions_in_order() {
        let session = |id: &str, day: u32, hour: u32| MentoringSession {
            id: id.into(),
            counterpart: PersonRef {
                id: "1".into(),
                name: "Sarah Johnson".into(),
            },
            date: date(2025, 4, day),
            start: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            duration_minutes: 60,
            topic: String::new(),
            kind: SessionKind::Video,
            status: SessionStatus::Upcoming,
            notes: None,
        };
        let sessions = vec![session("a", 18, 9), session("b", 15, 14), session("c", 15, 10)];
        let ids: Vec<_> = sessions_in_order(&sessions).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }
}
