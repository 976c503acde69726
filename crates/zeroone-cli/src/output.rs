use zeroone_types::models::{AdminUser, Comment, Notification, Post, Report, UserProfile};

pub fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("no posts");
    }
    for post in posts {
        print_post(post);
    }
}

pub fn print_post(post: &Post) {
    let liked = if post.liked_by_current_user { " (liked)" } else { "" };
    let hidden = if post.is_hidden { " [hidden]" } else { "" };
    println!(
        "#{} @{} {}{}",
        post.id,
        post.author.username,
        post.created_at.format("%Y-%m-%d %H:%M"),
        hidden
    );
    if !post.content.is_empty() {
        println!("  {}", post.content);
    }
    for media in &post.media {
        println!("  [{}] {}", media.kind.as_str(), media.url);
    }
    println!(
        "  {} likes{}, {} comments",
        post.like_count, liked, post.comment_count
    );
}

pub fn print_profile(user: &UserProfile) {
    let following = if user.is_followed_by_current_user {
        " (following)"
    } else {
        ""
    };
    println!("#{} @{}{}", user.id, user.username, following);
    if let Some(bio) = user.bio.as_deref().filter(|b| !b.is_empty()) {
        println!("  {}", bio);
    }
    println!(
        "  {} followers, {} following",
        user.follower_count, user.following_count
    );
}

pub fn print_notifications(notifications: &[Notification]) {
    if notifications.is_empty() {
        println!("no notifications");
    }
    for n in notifications {
        let marker = if n.is_read { " " } else { "*" };
        let when = n
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{} #{} {} {}", marker, n.id, when, n.message);
    }
}

pub fn print_comments(comments: &[Comment]) {
    if comments.is_empty() {
        println!("no comments");
    }
    for c in comments {
        print_comment(c);
    }
}

pub fn print_comment(c: &Comment) {
    let when = c
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    println!("#{} @{} {}", c.id, c.author_username, when);
    println!("  {}", c.content);
}

pub fn print_admin_user(user: &AdminUser) {
    let banned = if user.is_blocked { " [banned]" } else { "" };
    println!(
        "#{} @{} {}{}",
        user.id,
        user.username,
        user.role.as_deref().unwrap_or("-"),
        banned
    );
}

pub fn print_reports(reports: &[Report]) {
    if reports.is_empty() {
        println!("no reports");
    }
    for r in reports {
        println!(
            "#{} {:?} {:?}#{}: {}",
            r.id, r.status, r.target_type, r.target_id, r.reason
        );
    }
}
