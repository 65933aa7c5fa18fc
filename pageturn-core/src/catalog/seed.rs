//! Built-in storefront catalog

use crate::types::{Book, Price};
use chrono::NaiveDate;

pub(super) fn books() -> Vec<Book> {
    vec![
        Book {
            id: "shadows-city".into(),
            title: "Shadows in the City".into(),
            author: "Marcus Detective".into(),
            price: Price::new(12.99, 24.99),
            rating: 4.6,
            reviews: 2847,
            cover: "/assets/book-mystery.jpg".into(),
            genre: "Mystery".into(),
            description: "A gripping thriller that follows Detective Sarah Chen as she unravels a conspiracy that reaches the highest levels of city government.".into(),
            published_date: date(2024, 3, 15),
            pages: 342,
            isbn: "978-0-123456-78-9".into(),
            tags: strings(&["Thriller", "Detective", "Urban", "Crime"]),
            summary: "When a series of seemingly unconnected murders rocks the city, Detective Sarah Chen discovers a dark web of corruption that threatens to destroy everything she believes in. Racing against time, she must navigate treacherous alliances and deadly secrets to uncover the truth before becoming the next target.".into(),
            author_bio: "Marcus Detective is a former NYPD detective turned bestselling author. His authentic portrayal of police work and urban crime has earned him critical acclaim and a devoted following.".into(),
            quotes: strings(&[
                "The truth has a way of surfacing, no matter how deep you bury it.",
                "In the shadows of the city, justice wears many faces.",
                "Sometimes the greatest criminals hide behind the shiniest badges.",
            ]),
            benefits: strings(&[
                "Experience authentic detective work through expert storytelling",
                "Uncover the dark underbelly of urban politics and corruption",
                "Enjoy edge-of-your-seat suspense that keeps you reading all night",
            ]),
        },
        Book {
            id: "hearts-entwined".into(),
            title: "Hearts Entwined".into(),
            author: "Isabella Rose".into(),
            price: Price::new(9.99, 19.99),
            rating: 4.8,
            reviews: 5231,
            cover: "/assets/book-romance.jpg".into(),
            genre: "Romance".into(),
            description: "A heartwarming tale of second chances and unexpected love between a struggling artist and a successful entrepreneur.".into(),
            published_date: date(2024, 2, 14),
            pages: 298,
            isbn: "978-0-987654-32-1".into(),
            tags: strings(&["Contemporary", "Second Chance", "Artist", "Entrepreneur"]),
            summary: "When Emma's art studio faces closure, she never expects help to come from Daniel, the businessman who broke her heart years ago. As they work together to save her dreams, old feelings resurface and new possibilities emerge in this tale of forgiveness, growth, and enduring love.".into(),
            author_bio: "Isabella Rose is a bestselling contemporary romance author known for her emotionally rich characters and swoon-worthy love stories. She has written over fifteen novels that have touched readers' hearts worldwide.".into(),
            quotes: strings(&[
                "Love doesn't follow timelines; it follows the heart.",
                "Sometimes the person you least expect is exactly who you need.",
                "Art, like love, requires vulnerability to create something beautiful.",
            ]),
            benefits: strings(&[
                "Experience the joy of second-chance romance done right",
                "Explore themes of forgiveness, growth, and pursuing dreams",
                "Escape into a world of passion, art, and emotional healing",
            ]),
        },
        Book {
            id: "quantum-frontier".into(),
            title: "Quantum Frontier".into(),
            author: "Dr. Alex Nova".into(),
            price: Price::new(14.99, 27.99),
            rating: 4.4,
            reviews: 1923,
            cover: "/assets/book-scifi.jpg".into(),
            genre: "Science Fiction".into(),
            description: "A mind-bending journey through space and time as humanity discovers the secrets of quantum manipulation and interdimensional travel.".into(),
            published_date: date(2024, 1, 20),
            pages: 456,
            isbn: "978-0-456789-01-2".into(),
            tags: strings(&["Space Opera", "Quantum Physics", "Adventure", "Future"]),
            summary: "In 2087, Captain Elena Vasquez leads the first expedition through a quantum gateway to parallel dimensions. What they discover challenges everything humanity believes about reality, consciousness, and their place in the multiverse. A thrilling blend of hard science fiction and adventure.".into(),
            author_bio: "Dr. Alex Nova holds a PhD in Theoretical Physics and has worked with NASA on quantum computing projects. Their scientifically grounded approach to science fiction has earned them recognition in both literary and scientific communities.".into(),
            quotes: strings(&[
                "Reality is just the universe's way of keeping everything from happening at once.",
                "In the quantum realm, every choice creates a new world.",
                "The frontier isn't out there among the stars\u{2014}it's within the very fabric of existence.",
            ]),
            benefits: strings(&[
                "Explore cutting-edge scientific concepts through thrilling storytelling",
                "Experience mind-bending adventures across multiple dimensions",
                "Gain new perspectives on consciousness, reality, and human potential",
            ]),
        },
        Book {
            id: "success-principles".into(),
            title: "Success Principles".into(),
            author: "Jonathan Peak".into(),
            price: Price::new(16.99, 29.99),
            rating: 4.7,
            reviews: 8456,
            cover: "/assets/book-business.jpg".into(),
            genre: "Business".into(),
            description: "Transform your mindset and achieve extraordinary results with proven strategies from one of today's leading success coaches.".into(),
            published_date: date(2024, 4, 10),
            pages: 384,
            isbn: "978-0-234567-89-0".into(),
            tags: strings(&["Self-Help", "Leadership", "Motivation", "Success"]),
            summary: "Based on decades of research and real-world application, Success Principles reveals the fundamental strategies that separate high achievers from everyone else. Learn how to develop unstoppable confidence, create winning habits, and build the life you've always dreamed of.".into(),
            author_bio: "Jonathan Peak is a renowned success coach, keynote speaker, and entrepreneur who has helped thousands of individuals and organizations achieve breakthrough results. His previous books have been translated into over 20 languages.".into(),
            quotes: strings(&[
                "Success is not an accident\u{2014}it's a system of consistent actions aligned with clear purpose.",
                "The difference between successful people and everyone else is not talent, but habits.",
                "Your current situation is not your final destination unless you choose to stay there.",
            ]),
            benefits: strings(&[
                "Master the psychology of success with proven strategies",
                "Develop unshakeable confidence and winning mindsets",
                "Create systems that generate consistent, extraordinary results",
            ]),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_are_real() {
        assert!(books().iter().all(|b| b.published_date != NaiveDate::MIN));
    }
}
