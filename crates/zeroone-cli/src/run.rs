use anyhow::{Context, bail};

use zeroone_api::ApiClient;
use zeroone_optimistic::{ConfirmGate, Coordinator, DeleteOutcome, Notifier, Outcome, lock, shared};
use zeroone_types::api::{PostRequest, ReportRequest};

use crate::command::Command;
use crate::gate::StdinGate;
use crate::output::{
    print_admin_user, print_comment, print_comments, print_notifications, print_post, print_posts,
    print_profile, print_reports,
};

pub async fn run<T: Notifier>(
    command: Command,
    client: &ApiClient,
    coordinator: &Coordinator<ApiClient, T>,
    gate: &StdinGate,
) -> anyhow::Result<()> {
    match command {
        Command::Feed => print_posts(&client.feed().await?),
        Command::Posts(None) => print_posts(&client.all_posts().await?),
        Command::Posts(Some(user_id)) => print_posts(&client.user_posts(user_id).await?),
        Command::Post(id) => print_post(&client.post(id).await?),

        Command::NewPost(content) => {
            let request = PostRequest {
                content,
                ..Default::default()
            };
            print_post(&client.create_post(&request).await?);
        }

        Command::EditPost(id, content) => {
            let request = PostRequest {
                content,
                ..Default::default()
            };
            print_post(&client.update_post(id, &request).await?);
        }

        Command::Like(id) => {
            let post = shared(client.post(id).await?);
            let outcome = coordinator.toggle_like(&post).await;
            print_post(&lock(&post));
            settled(outcome)?;
        }

        Command::Delete(id) => {
            let posts = shared(vec![client.post(id).await?]);
            removed(coordinator.delete_post(&posts, id, gate).await, "post")?;
        }

        Command::Comments(post_id) => print_comments(&client.comments(post_id).await?),

        Command::Comment(post_id, content) => {
            print_comment(&client.create_comment(post_id, &content).await?);
        }

        Command::EditComment(id, content) => {
            print_comment(&client.update_comment(id, &content).await?);
        }

        Command::DeleteComment {
            post_id,
            comment_id,
        } => {
            let comments = shared(client.comments(post_id).await?);
            if !lock(&comments).iter().any(|c| c.id == comment_id) {
                bail!("no comment #{} under post #{}", comment_id, post_id);
            }
            removed(
                coordinator.delete_comment(&comments, comment_id, gate).await,
                "comment",
            )?;
        }

        Command::User(id) => print_profile(&client.user(id).await?),

        Command::Search(query) => {
            let users = client.search_users(&query).await?;
            if users.is_empty() {
                println!("no users match '{}'", query);
            }
            for user in &users {
                print_profile(user);
            }
        }

        Command::Follow(id) => {
            let profile = shared(client.user(id).await?);
            let outcome = coordinator.toggle_follow(&profile).await;
            print_profile(&lock(&profile));
            settled(outcome)?;
        }

        Command::Notifications { unread_only } => {
            let notifications = if unread_only {
                client.unread_notifications().await?
            } else {
                client.notifications().await?
            };
            print_notifications(&notifications);
            println!("{} unread", client.session().unread_count().await);
        }

        Command::Read(id) => {
            let notification = client
                .notifications()
                .await?
                .into_iter()
                .find(|n| n.id == id)
                .with_context(|| format!("no notification #{}", id))?;
            let notification = shared(notification);
            settled(coordinator.mark_read(&notification).await)?;
            println!("{} unread", client.session().unread_count().await);
        }

        Command::ReadAll => {
            let inbox = shared(client.notifications().await?);
            settled(coordinator.mark_all_read(&inbox).await)?;
            println!("{} unread", client.session().unread_count().await);
        }

        Command::Report { target, id, reason } => {
            let report = ReportRequest {
                target_id: id,
                target_type: target,
                reason,
            };
            settled(coordinator.submit_report(report).await)?;
            println!("report submitted");
        }

        Command::Hide(id) => {
            require_admin(client).await?;
            let post = client
                .admin_posts()
                .await?
                .into_iter()
                .find(|p| p.id == id)
                .with_context(|| format!("no post #{}", id))?;
            let post = shared(post);
            settled(coordinator.hide_post(&post).await)?;
            print_post(&lock(&post));
        }

        Command::AdminDelete(id) => {
            require_admin(client).await?;
            let posts = shared(client.admin_posts().await?);
            removed(coordinator.admin_delete_post(&posts, id, gate).await, "post")?;
        }

        Command::Users => {
            require_admin(client).await?;
            for user in &client.admin_users().await? {
                print_admin_user(user);
            }
        }

        Command::Ban(id) => {
            require_admin(client).await?;
            let user = client
                .admin_users()
                .await?
                .into_iter()
                .find(|u| u.id == id)
                .with_context(|| format!("no user #{}", id))?;
            let verb = if user.is_blocked { "UNBAN" } else { "BAN" };
            let prompt = format!("Are you sure you want to {} user {}?", verb, user.username);
            if !gate.confirm(&prompt) {
                println!("cancelled");
                return Ok(());
            }
            let user = shared(user);
            settled(coordinator.toggle_ban(&user).await)?;
            print_admin_user(&lock(&user));
        }

        Command::DeleteUser(id) => {
            require_admin(client).await?;
            let users = shared(client.admin_users().await?);
            removed(coordinator.admin_delete_user(&users, id, gate).await, "user")?;
        }

        Command::Reports => {
            require_admin(client).await?;
            print_reports(&client.admin_reports().await?);
        }

        Command::Resolve(id) => {
            require_admin(client).await?;
            let report = client
                .admin_reports()
                .await?
                .into_iter()
                .find(|r| r.id == id)
                .with_context(|| format!("no open report #{}", id))?;
            let report = shared(report);
            settled(coordinator.resolve_report(&report).await)?;
            println!("report #{} resolved", id);
        }
    }
    Ok(())
}

async fn require_admin(client: &ApiClient) -> anyhow::Result<()> {
    if !client.session().is_admin().await {
        bail!("this command needs an admin account");
    }
    Ok(())
}

fn settled(outcome: Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Confirmed => Ok(()),
        Outcome::Ignored => {
            println!("nothing to do");
            Ok(())
        }
        Outcome::RolledBack => bail!("the server rejected the change; nothing was modified"),
    }
}

fn removed(outcome: DeleteOutcome, what: &str) -> anyhow::Result<()> {
    match outcome {
        DeleteOutcome::Deleted => {
            println!("deleted");
            Ok(())
        }
        DeleteOutcome::Declined => {
            println!("cancelled");
            Ok(())
        }
        DeleteOutcome::Ignored => {
            println!("a delete for that {} is already running", what);
            Ok(())
        }
        DeleteOutcome::Failed => bail!("the server refused to delete the {}", what),
    }
}
