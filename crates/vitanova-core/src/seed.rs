//! Default reference content used to seed an empty or unreadable store.

use uuid::Uuid;

use crate::models::content::{Article, Hotline, ResourceLibrary, Soundscape, VideoRecord};

pub fn default_videos() -> Vec<VideoRecord> {
    [
        (
            "Mindfulness Meditation for Beginners",
            "A 10-minute guided meditation to help you reduce stress and find calm.",
            "https://placehold.co/600x400/2AB3B3/ffffff?text=Mindfulness",
            "https://www.youtube.com/embed/O-6f5wQXSu8",
        ),
        (
            "Understanding Anxiety",
            "Learn about the common signs of anxiety and effective coping strategies.",
            "https://placehold.co/600x400/7BC950/ffffff?text=Anxiety",
            "https://www.youtube.com/embed/WWloIAQpMcQ",
        ),
        (
            "Tips for a Better Sleep",
            "Improve your sleep hygiene with these simple and effective tips.",
            "https://placehold.co/600x400/FDD835/4A4A4A?text=Sleep",
            "https://www.youtube.com/embed/3_h_q_p_pA4",
        ),
        (
            "The Importance of a Balanced Diet",
            "Discover how nutrition impacts your mental and physical health.",
            "https://placehold.co/600x400/ef4444/ffffff?text=Diet",
            "https://www.youtube.com/embed/YF_h_oYwpmE",
        ),
    ]
    .into_iter()
    .map(|(title, description, thumbnail_url, video_url)| VideoRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail_url: thumbnail_url.to_string(),
        video_url: video_url.to_string(),
        created_at: None,
    })
    .collect()
}

pub fn default_resources() -> ResourceLibrary {
    ResourceLibrary {
        articles: vec![Article {
            id: Uuid::new_v4(),
            title: "Managing Exam Stress".to_string(),
            snippet: "Techniques to stay calm and focused during exam season.".to_string(),
            content: "Exam stress is a common experience for students. A little bit of \
                      stress can be a motivator, but too much can impact performance and \
                      well-being. Create a realistic study schedule, keep healthy sleep \
                      and eating habits, and practice relaxation techniques like deep \
                      breathing or light exercise."
                .to_string(),
        }],
        hotlines: vec![
            Hotline {
                id: Uuid::new_v4(),
                name: "National Suicide Prevention Lifeline".to_string(),
                phone: "988".to_string(),
                available: "24/7".to_string(),
            },
            Hotline {
                id: Uuid::new_v4(),
                name: "Crisis Text Line".to_string(),
                phone: "Text HOME to 741741".to_string(),
                available: "24/7".to_string(),
            },
        ],
        soundscapes: ["Gentle Rain", "Forest Ambience", "Ocean Waves"]
            .into_iter()
            .map(|title| Soundscape {
                id: Uuid::new_v4(),
                title: title.to_string(),
            })
            .collect(),
    }
}
