//! Read-only sample data for every page, defined once.
//!
//! Pages receive a shared [`Catalog`] instead of declaring their own arrays.
//! Role-dependent sets (inbox, notifications, dashboard cards) are exposed as
//! methods taking the viewer's [`Role`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::inbox::InboxSeed;
use crate::meeting::Participant;
use crate::models::{
    AvailabilityDay, Conversation, DashboardStat, Education, Experience, ForumCategory,
    ForumTopic, Mentee, MentoringSession, Mentor, MentorDetails, Mentorship, MentorshipStatus,
    Message, Notification, NotificationPreference, PersonRef, Resource, Review, Role,
    SessionKind, SessionStatus, UserProfile,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub profile: UserProfile,
    pub mentors: Vec<Mentor>,
    pub mentor_details: Vec<MentorDetails>,
    pub mentees: Vec<Mentee>,
    pub mentorships: Vec<Mentorship>,
    pub sessions: Vec<MentoringSession>,
    pub forum_categories: Vec<ForumCategory>,
    pub forum_topics: Vec<ForumTopic>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[allow(clippy::unused_self)]
impl Catalog {
    pub fn seeded() -> Self {
        let mentors = mentors();
        Self {
            profile: UserProfile::default(),
            mentorships: mentorships(&mentors),
            mentors,
            mentor_details: vec![sarah_johnson_details()],
            mentees: mentees(),
            sessions: sessions(),
            forum_categories: forum_categories(),
            forum_topics: forum_topics(),
        }
    }

    pub fn mentor(&self, id: &str) -> Option<&Mentor> {
        self.mentors.iter().find(|mentor| mentor.id == id)
    }

    pub fn mentor_details(&self, id: &str) -> Option<&MentorDetails> {
        self.mentor_details.iter().find(|details| details.mentor_id == id)
    }

    pub fn featured_mentors(&self) -> impl Iterator<Item = &Mentor> {
        self.mentors.iter().filter(|mentor| mentor.featured)
    }

    pub fn upcoming_sessions(&self) -> impl Iterator<Item = &MentoringSession> {
        self.sessions.iter().filter(|session| session.is_upcoming())
    }

    /// People the viewer can book with: directory mentors for mentees, the
    /// mentee roster for mentors.
    pub fn booking_counterparts(&self, role: Role) -> Vec<PersonRef> {
        match role {
            Role::Mentee => self
                .mentors
                .iter()
                .take(3)
                .map(|mentor| PersonRef {
                    id: mentor.id.clone(),
                    name: mentor.name.clone(),
                })
                .collect(),
            Role::Mentor => self
                .mentees
                .iter()
                .take(3)
                .map(|mentee| PersonRef {
                    id: mentee.id.clone(),
                    name: mentee.name.clone(),
                })
                .collect(),
        }
    }

    /// The two people on a mock call: the viewer and their counterpart.
    pub fn meeting_participants(&self, role: Role) -> Vec<Participant> {
        let counterpart = match role {
            Role::Mentee => "Sarah Johnson",
            Role::Mentor => "Emma Johnson",
        };
        vec![
            Participant {
                id: "self".into(),
                name: self.profile.name.clone(),
                role,
            },
            Participant {
                id: "counterpart".into(),
                name: counterpart.into(),
                role: role.counterpart(),
            },
        ]
    }

    /// Opening line of the in-room chat, sent by the counterpart.
    pub fn meeting_chat(&self, role: Role) -> Vec<Message> {
        self.meeting_participants(role)
            .into_iter()
            .skip(1)
            .map(|participant| {
                Message::from_counterpart(
                    "chat-1",
                    participant.name,
                    "Hello, how are you today?",
                    "2:01 PM",
                    true,
                    participant.role,
                )
            })
            .collect()
    }

    pub fn dashboard_stats(&self, role: Role) -> Vec<DashboardStat> {
        match role {
            Role::Mentee => vec![
                DashboardStat::new("Active Mentors", "2"),
                DashboardStat::new("Upcoming Sessions", "3"),
                DashboardStat::new("Session Hours", "12"),
                DashboardStat::new("Badges Earned", "4"),
            ],
            Role::Mentor => vec![
                DashboardStat::new("Active Mentees", "5"),
                DashboardStat::new("Upcoming Sessions", "3"),
                DashboardStat::new("Session Hours", "12"),
                DashboardStat::new("Rating", "4.8/5"),
            ],
        }
    }

    pub fn resources(&self, role: Role) -> Vec<Resource> {
        let rows: [(&str, &str, &str); 3] = match role {
            Role::Mentee => [
                (
                    "Interview Preparation Guide",
                    "A comprehensive guide to ace your technical interviews.",
                    "/resources/interviews",
                ),
                (
                    "Resume Building Workshop",
                    "Learn how to craft a resume that stands out to recruiters.",
                    "/resources/resume",
                ),
                (
                    "Career Transition Stories",
                    "Success stories from mentees who changed careers successfully.",
                    "/success-stories",
                ),
            ],
            Role::Mentor => [
                (
                    "Mentor Best Practices",
                    "Tips and strategies for effective mentoring sessions.",
                    "/mentor-guide",
                ),
                (
                    "Session Planning Tools",
                    "Resources to help you plan effective mentorship sessions.",
                    "/mentor-resources/planning",
                ),
                (
                    "Impact Tracking",
                    "Track and measure your impact as a mentor.",
                    "/mentor-impact",
                ),
            ],
        };
        rows.into_iter()
            .map(|(title, description, link)| Resource {
                title: title.into(),
                description: description.into(),
                link: link.into(),
            })
            .collect()
    }

    pub fn notifications(&self, role: Role) -> Vec<Notification> {
        let (request, sender) = match role {
            Role::Mentor => (
                "Priya Sharma wants to schedule a session with you",
                "Arjun Patel",
            ),
            Role::Mentee => ("Michael Chen accepted your session request", "Neha Gupta"),
        };
        vec![
            Notification::new("1", "New session request", request, "2 hours ago"),
            Notification::new(
                "2",
                "Upcoming session",
                "You have a session scheduled tomorrow at 3:00 PM",
                "1 day ago",
            ),
            Notification::new(
                "3",
                "New message",
                format!("You received a message from {sender}"),
                "3 days ago",
            ),
        ]
    }

    pub fn notification_preferences(&self) -> Vec<NotificationPreference> {
        [
            (
                "session-reminders",
                "Session Reminders",
                "Receive notifications about upcoming mentoring sessions",
            ),
            (
                "new-messages",
                "New Messages",
                "Get notified when you receive new messages",
            ),
            (
                "mentor-suggestions",
                "Mentor Suggestions",
                "Receive suggestions for new mentors that match your interests",
            ),
            (
                "platform-updates",
                "Platform Updates",
                "Stay updated with new features and improvements",
            ),
        ]
        .into_iter()
        .map(|(id, title, description)| NotificationPreference {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            enabled: true,
        })
        .collect()
    }

    /// Conversations and message logs as seen by `role`.
    pub fn inbox_seed(&self, role: Role) -> InboxSeed {
        let them = role.counterpart();
        let rows = inbox_rows(role);
        let mut seed = InboxSeed::default();
        for row in rows {
            let threads = row
                .messages
                .iter()
                .enumerate()
                .map(|(index, (mine, content, timestamp, read))| {
                    let id = format!("{}-{}", row.id, index + 1);
                    if *mine {
                        Message::from_current_user(id, *content, *timestamp, role)
                    } else {
                        Message::from_counterpart(id, row.participant, *content, *timestamp, *read, them)
                    }
                })
                .collect();
            seed.conversations.push(Conversation {
                id: row.id.into(),
                participant: row.participant.into(),
                last_message: row.preview.into(),
                timestamp: row.timestamp.into(),
                unread: row.unread,
                role: them,
            });
            seed.threads.push((row.id.into(), threads));
        }
        seed
    }
}

struct InboxRow {
    id: &'static str,
    participant: &'static str,
    preview: &'static str,
    timestamp: &'static str,
    unread: u32,
    /// (sent by the viewer, content, timestamp, read)
    messages: Vec<(bool, &'static str, &'static str, bool)>,
}

fn inbox_rows(role: Role) -> Vec<InboxRow> {
    match role {
        Role::Mentor => vec![
            InboxRow {
                id: "1",
                participant: "Arjun Patel",
                preview: "Thank you for the feedback on my resume!",
                timestamp: "2 hours ago",
                unread: 1,
                messages: vec![
                    (false, "Hi, I wanted to thank you for reviewing my resume last week.", "2 hours ago", true),
                    (true, "You're welcome! Have you sent any applications yet?", "1 hour ago", true),
                    (false, "Yes, I applied to three companies you recommended. Fingers crossed!", "30 minutes ago", false),
                ],
            },
            InboxRow {
                id: "2",
                participant: "Priya Sharma",
                preview: "When can we schedule our next session?",
                timestamp: "1 day ago",
                unread: 0,
                messages: vec![
                    (false, "Hi, I was wondering when we could schedule our next session?", "1 day ago", true),
                    (true, "I have some time available next Tuesday afternoon.", "1 day ago", true),
                ],
            },
            InboxRow {
                id: "3",
                participant: "Amit Verma",
                preview: "I applied for that job we discussed",
                timestamp: "2 days ago",
                unread: 0,
                messages: vec![
                    (false, "I applied for that job we discussed last week.", "2 days ago", true),
                    (true, "That's great news! Let me know if you hear back.", "2 days ago", true),
                ],
            },
        ],
        Role::Mentee => vec![
            InboxRow {
                id: "1",
                participant: "Neha Gupta",
                preview: "Looking forward to our session next week!",
                timestamp: "2 hours ago",
                unread: 1,
                messages: vec![
                    (false, "Hello! I'm looking forward to our session next week.", "2 hours ago", true),
                    (true, "Me too! I have a few specific topics I'd like to discuss.", "1 hour ago", true),
                    (false, "Great! I'll make sure to prepare some resources on those topics.", "30 minutes ago", false),
                ],
            },
            InboxRow {
                id: "2",
                participant: "Rajesh Kumar",
                preview: "I've shared some resources ahead of our meeting.",
                timestamp: "1 day ago",
                unread: 0,
                messages: vec![
                    (false, "Hi, I've shared some resources for our next meeting.", "1 day ago", true),
                    (true, "Thank you! These look very helpful.", "1 day ago", true),
                ],
            },
            InboxRow {
                id: "3",
                participant: "Deepa Reddy",
                preview: "Do you have time to review my code?",
                timestamp: "2 days ago",
                unread: 0,
                messages: vec![
                    (false, "Do you have time to review my code this week?", "2 days ago", true),
                    (true, "Yes, I can look at it on Thursday evening.", "2 days ago", true),
                ],
            },
        ],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn mentor(
    id: &str,
    name: &str,
    title: &str,
    company: &str,
    skills: &[&str],
    (rating, review_count): (f32, u32),
    featured: bool,
    location: &str,
    hourly_rate: u32,
    availability: &str,
) -> Mentor {
    Mentor {
        id: id.into(),
        name: name.into(),
        title: title.into(),
        company: Some(company.into()),
        skills: strings(skills),
        rating,
        review_count,
        featured,
        location: location.into(),
        hourly_rate,
        availability: availability.into(),
    }
}

fn mentors() -> Vec<Mentor> {
    vec![
        mentor(
            "1",
            "Sarah Johnson",
            "Product Design Lead",
            "Google",
            &["UI/UX Design", "Product Strategy", "Career Growth", "Leadership"],
            (4.9, 42),
            true,
            "San Francisco, CA",
            75,
            "Evenings & Weekends",
        ),
        mentor(
            "2",
            "Michael Chen",
            "Senior Software Engineer",
            "Microsoft",
            &["Full-Stack Development", "System Architecture", "React", "Mentorship"],
            (4.8, 35),
            true,
            "Seattle, WA",
            85,
            "Weekday Evenings",
        ),
        mentor(
            "3",
            "Emily Rodriguez",
            "Marketing Director",
            "Adobe",
            &["Digital Marketing", "Brand Strategy", "Content Creation", "Analytics"],
            (4.7, 29),
            false,
            "Austin, TX",
            70,
            "Flexible",
        ),
        mentor(
            "4",
            "David Park",
            "Data Science Manager",
            "Amazon",
            &["Machine Learning", "Python", "Data Analysis", "AI Ethics"],
            (4.9, 19),
            false,
            "New York, NY",
            90,
            "Weekends Only",
        ),
        mentor(
            "5",
            "Priya Sharma",
            "Product Manager",
            "Spotify",
            &["Product Strategy", "Agile Methodologies", "User Research", "Roadmapping"],
            (4.6, 22),
            false,
            "London, UK",
            65,
            "Weekdays",
        ),
        mentor(
            "6",
            "James Wilson",
            "Frontend Architect",
            "Netflix",
            &["React", "JavaScript", "UI Architecture", "Performance Optimization"],
            (4.8, 31),
            false,
            "Los Angeles, CA",
            80,
            "Evenings Only",
        ),
    ]
}

fn sarah_johnson_details() -> MentorDetails {
    MentorDetails {
        mentor_id: "1".into(),
        bio: "I'm a Product Design Lead with over 8 years of experience in the tech industry. \
              I've helped build products used by millions and led design teams at both startups \
              and large corporations. My passion is helping designers level up their skills and \
              navigate their career path in the tech industry."
            .into(),
        languages: strings(&["English", "Spanish"]),
        expertise: strings(&[
            "UI/UX Design",
            "Product Strategy",
            "Career Growth",
            "Leadership",
            "Design Systems",
            "UX Research",
        ]),
        experience: [
            ("Product Design Lead", "Google", "2022 - Present"),
            ("Senior Product Designer", "Airbnb", "2019 - 2022"),
            ("Product Designer", "Dropbox", "2017 - 2019"),
        ]
        .into_iter()
        .map(|(role, company, period)| Experience {
            role: role.into(),
            company: company.into(),
            period: period.into(),
        })
        .collect(),
        education: [
            ("MS, Human-Computer Interaction", "Stanford University", "2017"),
            ("BA, Graphic Design", "Rhode Island School of Design", "2015"),
        ]
        .into_iter()
        .map(|(degree, school, year)| Education {
            degree: degree.into(),
            school: school.into(),
            year: year.into(),
        })
        .collect(),
        mentorship_areas: strings(&[
            "Career transitions into Product Design",
            "Building your design portfolio",
            "Preparing for design interviews",
            "Leadership skills for designers",
            "Work-life balance in tech",
        ]),
        weekly_availability: vec![
            AvailabilityDay {
                day: "Monday".into(),
                slots: strings(&["6:00 PM - 7:00 PM"]),
            },
            AvailabilityDay {
                day: "Wednesday".into(),
                slots: strings(&["5:30 PM - 6:30 PM", "7:00 PM - 8:00 PM"]),
            },
            AvailabilityDay {
                day: "Saturday".into(),
                slots: strings(&["10:00 AM - 11:00 AM", "2:00 PM - 3:00 PM"]),
            },
        ],
        timezone: "Pacific Time (PT)".into(),
        reviews: vec![
            Review {
                id: "1".into(),
                author: "Alex Chen".into(),
                rating: 5,
                date: "2 months ago".into(),
                text: "Sarah was incredibly helpful in helping me prepare for my design interviews. \
                       Her feedback on my portfolio was invaluable, and I ended up getting offers \
                       from multiple companies!"
                    .into(),
            },
            Review {
                id: "2".into(),
                author: "Maria Lopez".into(),
                rating: 5,
                date: "4 months ago".into(),
                text: "I was transitioning from graphic design to UX design, and Sarah provided \
                       excellent guidance throughout the process. She shared practical resources \
                       and gave constructive feedback that helped me land my first UX role."
                    .into(),
            },
            Review {
                id: "3".into(),
                author: "Jamal Thompson".into(),
                rating: 4,
                date: "6 months ago".into(),
                text: "Sarah is a knowledgeable mentor who provides actionable advice. Our sessions \
                       were always well-structured, and she was generous with sharing her industry \
                       insights."
                    .into(),
            },
        ],
        session_length_minutes: 60,
        completed_sessions: 86,
    }
}

fn mentees() -> Vec<Mentee> {
    [
        (
            "1",
            "Emma Johnson",
            "Frontend Developer",
            &["React", "TypeScript", "UI/UX"][..],
            "Junior developer looking to improve frontend skills and architecture knowledge",
            "2 days ago",
        ),
        (
            "2",
            "David Martinez",
            "Data Science Student",
            &["Python", "Data Analysis", "Machine Learning"][..],
            "Studying data science, looking for guidance on career paths and project work",
            "1 week ago",
        ),
        (
            "3",
            "Sarah Wilson",
            "Mobile Developer",
            &["React Native", "Flutter", "iOS"][..],
            "Mobile app developer looking to discuss architecture and performance optimization",
            "Just started",
        ),
        (
            "4",
            "Daniel Kim",
            "Backend Engineer",
            &["Node.js", "Java", "Databases"][..],
            "Backend developer looking for guidance on system design and scaling",
            "3 days ago",
        ),
    ]
    .into_iter()
    .map(|(id, name, title, skills, bio, last_session)| Mentee {
        id: id.into(),
        name: name.into(),
        title: title.into(),
        skills: strings(skills),
        bio: bio.into(),
        last_session: last_session.into(),
    })
    .collect()
}

fn at(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}

fn mentorships(directory: &[Mentor]) -> Vec<Mentorship> {
    [
        ("1", Some(("2025-04-15", "14:00")), MentorshipStatus::Active),
        ("2", Some(("2025-04-18", "10:30")), MentorshipStatus::Active),
        ("5", None, MentorshipStatus::Pending),
        ("6", None, MentorshipStatus::Completed),
    ]
    .into_iter()
    .filter_map(|(mentor_id, next, status)| {
        let mentor = directory.iter().find(|mentor| mentor.id == mentor_id)?;
        Some(Mentorship {
            mentor_id: mentor.id.clone(),
            name: mentor.name.clone(),
            title: mentor.title.clone(),
            company: mentor.company.clone().unwrap_or_default(),
            expertise: mentor.skills.iter().take(3).cloned().collect(),
            next_session: next.and_then(|(date, time)| at(date, time)),
            status,
        })
    })
    .collect()
}

fn sessions() -> Vec<MentoringSession> {
    [
        ("1", ("1", "Sarah Johnson"), "2025-04-15", ("14:00", "15:00"), "Career Development Discussion", SessionKind::Video, SessionStatus::Upcoming, None),
        ("2", ("2", "Michael Chen"), "2025-04-18", ("10:30", "11:15"), "Technical Interview Preparation", SessionKind::Video, SessionStatus::Upcoming, None),
        ("3", ("1", "Sarah Johnson"), "2025-04-22", ("13:00", "14:00"), "Resume Review Session", SessionKind::Video, SessionStatus::Upcoming, None),
        (
            "4",
            ("6", "James Wilson"),
            "2025-04-05",
            ("11:00", "12:00"),
            "Portfolio Critique",
            SessionKind::InPerson,
            SessionStatus::Completed,
            Some("Discussed improvements for the UX portfolio case studies."),
        ),
    ]
    .into_iter()
    .filter_map(|(id, (person_id, person), date, (start, end), topic, kind, status, notes)| {
        let starts = at(date, start)?;
        let ends = at(date, end)?;
        let minutes = (ends - starts).num_minutes();
        Some(MentoringSession {
            id: id.into(),
            counterpart: PersonRef {
                id: person_id.into(),
                name: person.into(),
            },
            date: starts.date(),
            start: starts.time(),
            end: ends.time(),
            duration_minutes: u32::try_from(minutes).ok()?,
            topic: topic.into(),
            kind,
            status,
            notes: notes.map(str::to_string),
        })
    })
    .collect()
}

fn forum_categories() -> Vec<ForumCategory> {
    [
        ("1", "Career Development", 124),
        ("2", "Technical Skills", 97),
        ("3", "Leadership", 56),
        ("4", "Work-Life Balance", 42),
        ("5", "Entrepreneurship", 35),
    ]
    .into_iter()
    .map(|(id, name, topic_count)| ForumCategory {
        id: id.into(),
        name: name.into(),
        topic_count,
    })
    .collect()
}

fn forum_topics() -> Vec<ForumTopic> {
    [
        ("1", "How to prepare for a technical interview at FAANG companies?", ("Alex Rivera", Role::Mentee), "2 days ago", (24, 342), "Technical Skills", (true, true)),
        ("2", "Transitioning from engineering to product management - advice needed", ("Jamie Kennedy", Role::Mentee), "1 week ago", (18, 276), "Career Development", (true, false)),
        ("3", "Best practices for managing remote teams effectively", ("Michael Chen", Role::Mentor), "3 days ago", (15, 189), "Leadership", (false, false)),
        ("4", "How do you handle burnout while working at a high-growth startup?", ("Sarah Johnson", Role::Mentor), "5 days ago", (29, 412), "Work-Life Balance", (true, false)),
        ("5", "Resources for learning React and modern frontend frameworks", ("Taylor Brooks", Role::Mentee), "1 day ago", (12, 156), "Technical Skills", (false, true)),
    ]
    .into_iter()
    .map(|(id, title, (author, author_role), posted, (replies, views), category, (verified, trending))| ForumTopic {
        id: id.into(),
        title: title.into(),
        author: author.into(),
        author_role,
        posted: posted.into(),
        replies,
        views,
        category: category.into(),
        verified,
        trending,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_seeded_sets_are_populated() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.mentors.len(), 6);
        assert_eq!(catalog.mentees.len(), 4);
        assert_eq!(catalog.mentorships.len(), 4);
        assert_eq!(catalog.sessions.len(), 4);
        assert_eq!(catalog.forum_categories.len(), 5);
        assert_eq!(catalog.forum_topics.len(), 5);
        assert_eq!(catalog.featured_mentors().count(), 2);
    }

    #[test]
    fn test_mentor_ids_are_unique() {
        let catalog = Catalog::seeded();
        let ids: HashSet<_> = catalog.mentors.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.mentors.len());
    }

    /// Mentorships and sessions point at people in the directory.
    #[test]
    fn test_relationships_reference_directory_mentors() {
        let catalog = Catalog::seeded();
        for mentorship in &catalog.mentorships {
            let mentor = catalog.mentor(&mentorship.mentor_id).unwrap();
            assert_eq!(mentor.name, mentorship.name);
        }
        for session in &catalog.sessions {
            let mentor = catalog.mentor(&session.counterpart.id).unwrap();
            assert_eq!(mentor.name, session.counterpart.name);
        }
    }

    #[test]
    fn test_session_durations_follow_times() {
        let catalog = Catalog::seeded();
        let durations: Vec<_> = catalog.sessions.iter().map(|s| s.duration_minutes).collect();
        assert_eq!(durations, [60, 45, 60, 60]);
        assert_eq!(catalog.upcoming_sessions().count(), 3);
    }

    #[test]
    fn test_details_exist_only_for_profiled_mentors() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.mentor_details("1").unwrap().reviews.len(), 3);
        assert!(catalog.mentor_details("2").is_none());
        assert!(catalog.mentor("99").is_none());
    }

    #[test]
    fn test_inbox_seed_matches_role() {
        let catalog = Catalog::seeded();
        for role in Role::iter() {
            let seed = catalog.inbox_seed(role);
            assert_eq!(seed.conversations.len(), 3);
            assert!(seed.conversations.iter().all(|c| c.role == role.counterpart()));
            let (id, first) = &seed.threads[0];
            assert_eq!(id, "1");
            assert_eq!(first.len(), 3);
            assert!(!first[2].read);
            assert!(first[1].is_from_current_user());
            assert_eq!(first[1].role, role);
        }
        assert_eq!(
            catalog.inbox_seed(Role::Mentor).conversations[0].participant,
            "Arjun Patel"
        );
        assert_eq!(
            catalog.inbox_seed(Role::Mentee).conversations[0].participant,
            "Neha Gupta"
        );
    }

    #[test]
    fn test_role_dependent_sets() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.dashboard_stats(Role::Mentee)[0].label, "Active Mentors");
        assert_eq!(catalog.dashboard_stats(Role::Mentor)[3].value, "4.8/5");
        assert_eq!(catalog.resources(Role::Mentor)[0].title, "Mentor Best Practices");
        assert_eq!(catalog.notifications(Role::Mentee).len(), 3);
        assert_eq!(catalog.notification_preferences().len(), 4);

        let participants = catalog.meeting_participants(Role::Mentor);
        assert_eq!(participants[1].role, Role::Mentee);
        assert_eq!(catalog.meeting_chat(Role::Mentor)[0].sender, "Emma Johnson");

        let counterparts = catalog.booking_counterparts(Role::Mentee);
        assert_eq!(counterparts[0].name, "Sarah Johnson");
        assert_eq!(catalog.booking_counterparts(Role::Mentor)[0].name, "Emma Johnson");
    }
}
