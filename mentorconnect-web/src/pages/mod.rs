mod about;
mod auth;
mod dashboard;
mod error;
mod find_mentors;
mod forum;
mod home;
mod meeting_room;
mod mentor_profile;
mod messages;
mod my_mentees;
mod my_mentors;
mod new_session;
mod schedule;
mod schedule_meeting;
mod settings;

pub use about::AboutPage;
pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use find_mentors::FindMentorsPage;
pub use forum::ForumPage;
pub use home::HomePage;
pub use meeting_room::MeetingRoomPage;
pub use mentor_profile::MentorProfilePage;
pub use messages::MessagesPage;
pub use my_mentees::MyMenteesPage;
pub use my_mentors::MyMentorsPage;
pub use new_session::NewSessionPage;
pub use schedule::SchedulePage;
pub use schedule_meeting::ScheduleMeetingPage;
pub use settings::SettingsPage;
