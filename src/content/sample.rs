//! Built-in sample content.
//!
//! The app has no backend; everything it shows comes from here.  Swap these
//! functions for a real content source if one ever exists.

use super::{Ad, Author, Category, PopularPost, Post};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    category: &str,
    image: &str,
    author: &str,
    date: &str,
    read_time: &str,
) -> Post {
    let seed = author
        .split_whitespace()
        .next()
        .unwrap_or(author)
        .to_lowercase();
    Post {
        id: id.into(),
        title: title.into(),
        excerpt: excerpt.into(),
        category: category.into(),
        image: image.into(),
        author: Author::new(author, format!("{AVATAR_BASE}{seed}")),
        date: date.into(),
        read_time: read_time.into(),
    }
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w={width}&q=80")
}

/// Slides for the hero carousel.
pub fn hero_slides() -> Vec<Post> {
    let slide = |id, title, excerpt, category, photo| {
        post(id, title, excerpt, category, &unsplash(photo, 1200), "", "", "")
    };
    vec![
        slide(
            "1",
            "The Future of Web Development: Trends to Watch in 2024",
            "Discover the cutting-edge technologies and methodologies shaping the future of web development.",
            "Technology",
            "1498050108023-c5249f4df085",
        ),
        slide(
            "2",
            "Sustainable Living: Small Changes with Big Impact",
            "Learn how simple daily habits can contribute to a more sustainable and eco-friendly lifestyle.",
            "Lifestyle",
            "1542601906990-b4d3fb778b09",
        ),
        slide(
            "3",
            "The Art of Mindfulness: Finding Peace in a Busy World",
            "Explore practical mindfulness techniques to reduce stress and improve mental wellbeing.",
            "Wellness",
            "1506126613408-eca07ce68773",
        ),
        slide(
            "4",
            "Global Cuisine: A Journey Through Flavors",
            "Embark on a culinary adventure exploring diverse dishes from around the world.",
            "Food",
            "1504674900247-0877df9cc836",
        ),
        slide(
            "5",
            "Digital Nomad Life: Working from Anywhere",
            "Discover the realities of the digital nomad lifestyle and tips for remote work success.",
            "Work",
            "1508739773434-c26b3d09e071",
        ),
    ]
}

/// Posts shown on the home page feed.
pub fn feed_posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "The Future of Web Development: Trends to Watch in 2023",
            "Explore the cutting-edge technologies and methodologies that are shaping the future of web development. From WebAssembly to Edge Computing, discover what's next.",
            "Technology",
            &unsplash("1498050108023-c5249f4df085", 800),
            "Alex Johnson",
            "May 15, 2023",
            "5 min read",
        ),
        post(
            "2",
            "Mastering React Hooks: A Comprehensive Guide",
            "Learn how to leverage the power of React Hooks to write cleaner, more efficient functional components. This guide covers everything from useState to custom hooks.",
            "Development",
            &unsplash("1633356122544-f134324a6cee", 800),
            "Sarah Chen",
            "April 28, 2023",
            "8 min read",
        ),
        post(
            "3",
            "The Psychology of User Experience: Designing for Emotion",
            "Discover how understanding human psychology can help you create more engaging and effective user experiences. Learn practical techniques for emotional design.",
            "UX Design",
            &unsplash("1586717791821-3f44a563fa4c", 800),
            "Michael Torres",
            "May 2, 2023",
            "6 min read",
        ),
        post(
            "4",
            "Building Scalable APIs with GraphQL and Node.js",
            "Learn how to design and implement robust, scalable APIs using GraphQL and Node.js. This tutorial covers schema design, resolvers, and best practices.",
            "Backend",
            &unsplash("1555066931-4365d14bab8c", 800),
            "Jessica Kim",
            "May 10, 2023",
            "10 min read",
        ),
        post(
            "5",
            "CSS Grid vs Flexbox: When to Use Which",
            "Understand the strengths and weaknesses of CSS Grid and Flexbox, and learn when to use each layout system for optimal results in your web projects.",
            "CSS",
            &unsplash("1507721999472-8ed4421c4af2", 800),
            "David Wilson",
            "April 22, 2023",
            "7 min read",
        ),
        post(
            "6",
            "Optimizing Web Performance: A Deep Dive",
            "Explore advanced techniques for improving web performance, from code splitting to resource prioritization. Learn how to measure and optimize for real-world conditions.",
            "Performance",
            &unsplash("1460925895917-afdab827c52f", 800),
            "Emma Rodriguez",
            "May 8, 2023",
            "9 min read",
        ),
        post(
            "7",
            "Introduction to TypeScript for JavaScript Developers",
            "Make the transition from JavaScript to TypeScript with this beginner-friendly guide. Learn about static typing, interfaces, and other key TypeScript features.",
            "TypeScript",
            &unsplash("1516116216624-53e697fedbea", 800),
            "Ryan Park",
            "May 5, 2023",
            "6 min read",
        ),
        post(
            "8",
            "Accessibility in Web Design: Best Practices",
            "Learn how to create websites that are accessible to all users, including those with disabilities. This guide covers WCAG guidelines, ARIA roles, and testing tools.",
            "Accessibility",
            &unsplash("1584697964358-3e14ca57658b", 800),
            "Olivia Martinez",
            "April 30, 2023",
            "8 min read",
        ),
        post(
            "9",
            "The Complete Guide to Modern CSS Animation",
            "Master the art of CSS animation with this comprehensive guide. Learn about keyframes, transitions, and how to create smooth, performant animations for the web.",
            "CSS",
            &unsplash("1550063873-ab792950096b", 800),
            "Thomas Lee",
            "May 12, 2023",
            "7 min read",
        ),
    ]
}

/// Every post the category pages can draw from.
pub fn catalog() -> Vec<Post> {
    let mut posts: Vec<Post> = feed_posts().into_iter().take(5).collect();
    posts.extend([
        post(
            "6",
            "Sustainable Living: Small Changes with Big Impact",
            "Learn how simple daily habits can contribute to a more sustainable and eco-friendly lifestyle. Discover practical tips for reducing your carbon footprint.",
            "Lifestyle",
            &unsplash("1542601906990-b4d3fb778b09", 800),
            "Emma Rodriguez",
            "May 8, 2023",
            "9 min read",
        ),
        post(
            "7",
            "The Art of Mindfulness: Finding Peace in a Busy World",
            "Explore practical mindfulness techniques to reduce stress and improve mental wellbeing. Learn how to incorporate mindfulness into your daily routine.",
            "Health",
            &unsplash("1506126613408-eca07ce68773", 800),
            "Ryan Park",
            "May 5, 2023",
            "6 min read",
        ),
        post(
            "8",
            "Global Cuisine: A Journey Through Flavors",
            "Embark on a culinary adventure exploring diverse dishes from around the world. Discover new recipes and cooking techniques from different cultures.",
            "Food",
            &unsplash("1504674900247-0877df9cc836", 800),
            "Olivia Martinez",
            "April 30, 2023",
            "8 min read",
        ),
        post(
            "9",
            "Digital Nomad Life: Working from Anywhere",
            "Discover the realities of the digital nomad lifestyle and tips for remote work success. Learn how to balance work and travel while staying productive.",
            "Travel",
            &unsplash("1508739773434-c26b3d09e071", 800),
            "Thomas Lee",
            "May 12, 2023",
            "7 min read",
        ),
    ]);
    posts
}

pub fn ads() -> Vec<Ad> {
    vec![
        Ad::new(
            "ad1",
            unsplash("1661956602116-aa6865609028", 800),
            "https://example.com/ad1",
            "TechGadgets Pro",
        ),
        Ad::new(
            "ad2",
            unsplash("1505373877841-8d25f7d46678", 800),
            "https://example.com/ad2",
            "CodeMaster Academy",
        ),
        Ad::new(
            "ad3",
            unsplash("1523961131990-5ea7c61b2107", 800),
            "https://example.com/ad3",
            "DesignHub Tools",
        ),
    ]
}

pub fn popular_posts() -> Vec<PopularPost> {
    let entry = |id: &str, title: &str, photo: &str, date: &str, views| PopularPost {
        id: id.into(),
        title: title.into(),
        image: unsplash(photo, 300),
        date: date.into(),
        views,
    };
    vec![
        entry(
            "1",
            "The Future of Web Development in 2024",
            "1498050108023-c5249f4df085",
            "May 15, 2024",
            1250,
        ),
        entry(
            "2",
            "How AI is Transforming Content Creation",
            "1677442135136-760c813a743d",
            "May 10, 2024",
            980,
        ),
        entry(
            "3",
            "Essential UX Principles for Modern Websites",
            "1581291518633-83b4ebd1d83e",
            "May 5, 2024",
            845,
        ),
    ]
}

/// Categories listed in the navigation bar, in display order.
pub fn categories() -> Vec<Category> {
    ["Technology", "Travel", "Food", "Lifestyle", "Health"]
        .into_iter()
        .map(Category::new)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::content::filter_by_category;

    #[test]
    fn ids_are_unique() {
        for posts in [hero_slides(), feed_posts(), catalog()] {
            let ids: HashSet<_> = posts.iter().map(|p| p.id.clone()).collect();
            assert_eq!(ids.len(), posts.len());
        }
        let ad_ids: HashSet<_> = ads().into_iter().map(|a| a.id).collect();
        assert_eq!(ad_ids.len(), 3);
    }

    #[test]
    fn every_nav_category_has_a_post() {
        let catalog = catalog();
        for cat in categories() {
            assert!(
                !filter_by_category(&catalog, &cat.name).is_empty(),
                "{} has no posts",
                cat.name
            );
        }
    }

    #[test]
    fn avatar_seed_is_lowercased_first_name() {
        let posts = feed_posts();
        assert_eq!(
            posts[0].author.avatar,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=alex"
        );
    }
}
