//! `giapha` — command-line front-end for the gia phả backend.
//!
//! One subcommand tree per backend domain, driving the `client` crate and
//! printing results as pretty JSON. The session token is mirrored to a
//! file so consecutive invocations stay logged in.


use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};

use client::services::funds::{NewDonation, NewExpense, ProofImage};
use client::services::{account, campaigns, events, family, funds, notifications, posts};
use client::session::jwt;
use client::util::paging::{PageControl, page_controls};
use client::{ApiClient, ApiError, SessionStore};
use models::ReactionKind;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to read proof image {path}: {source}")]
    ReadProof {
        path: String,
        source: std::io::Error,
    },
    #[error("unknown reaction kind `{0}` (expected like/love/haha/sad/angry)")]
    UnknownReaction(String),
    #[error("no session token stored; run `giapha login` first")]
    NotLoggedIn,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "giapha", about = "Gia phả family-platform API CLI")]
struct Cli {
    #[arg(long, env = "GIAPHA_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// File the session token is persisted to between invocations.
    #[arg(long, env = "GIAPHA_TOKEN_FILE", default_value = ".giapha-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with email and password, storing the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in with a Google sign-in credential string.
    GoogleLogin {
        #[arg(long)]
        credential: String,
    },
    /// Create an account (does not log in).
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        full_name: String,
    },
    /// Drop the stored session token.
    Logout,
    /// Show the stored token's claims and the server's view of the session.
    Whoami,
    Profile(ProfileCommand),
    Tree(TreeCommand),
    Member(MemberCommand),
    Event(EventCommand),
    Post(PostCommand),
    Fund(FundCommand),
    Campaign(CampaignCommand),
    Notify(NotifyCommand),
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Show,
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        biography: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Args, Debug)]
struct TreeCommand {
    #[command(subcommand)]
    command: TreeSubcommand,
}

#[derive(Subcommand, Debug)]
enum TreeSubcommand {
    List,
    Show { tree_id: String },
}

#[derive(Args, Debug)]
struct MemberCommand {
    #[command(subcommand)]
    command: MemberSubcommand,
}

#[derive(Subcommand, Debug)]
enum MemberSubcommand {
    List {
        tree_id: String,
    },
    Show {
        member_id: String,
    },
    Create {
        #[arg(long)]
        tree_id: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        generation: Option<i32>,
        #[arg(long)]
        father_id: Option<String>,
        #[arg(long)]
        mother_id: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        date_of_death: Option<String>,
        #[arg(long)]
        biography: Option<String>,
    },
    Update {
        member_id: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        generation: Option<i32>,
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        date_of_death: Option<String>,
        #[arg(long)]
        biography: Option<String>,
    },
    Delete {
        member_id: String,
    },
}

#[derive(Args, Debug)]
struct EventCommand {
    #[command(subcommand)]
    command: EventSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventSubcommand {
    /// List a tree's events for one calendar month.
    List {
        tree_id: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u8,
    },
    Show {
        event_id: String,
    },
    Create {
        #[arg(long)]
        tree_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        end_time: Option<String>,
        #[arg(long, default_value_t = false)]
        recurring: bool,
    },
    Update {
        event_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        start_time: Option<String>,
        #[arg(long)]
        end_time: Option<String>,
    },
    Delete {
        event_id: String,
    },
}

#[derive(Args, Debug)]
struct PostCommand {
    #[command(subcommand)]
    command: PostSubcommand,
}

#[derive(Subcommand, Debug)]
enum PostSubcommand {
    /// Show one page of the feed plus the pagination row.
    Feed {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    Create {
        #[arg(long)]
        content: String,
        #[arg(long = "image-url")]
        image_urls: Vec<String>,
    },
    Delete {
        post_id: String,
    },
    Comments {
        post_id: String,
    },
    Comment {
        post_id: String,
        #[arg(long)]
        content: String,
    },
    DeleteComment {
        post_id: String,
        comment_id: String,
    },
    Reactions {
        post_id: String,
    },
    React {
        post_id: String,
        #[arg(long)]
        kind: String,
    },
    Unreact {
        post_id: String,
    },
}

#[derive(Args, Debug)]
struct FundCommand {
    #[command(subcommand)]
    command: FundSubcommand,
}

#[derive(Subcommand, Debug)]
enum FundSubcommand {
    List {
        tree_id: String,
    },
    Show {
        fund_id: String,
    },
    Balance {
        fund_id: String,
    },
    Donations {
        fund_id: String,
    },
    Donation(DonationCommand),
    Expense(ExpenseCommand),
}

#[derive(Args, Debug)]
struct DonationCommand {
    #[command(subcommand)]
    command: DonationSubcommand,
}

#[derive(Args, Debug, Clone)]
struct DonationBody {
    #[arg(long)]
    donor_name: String,
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    method: Option<String>,
    #[arg(long)]
    note: Option<String>,
}

#[derive(Subcommand, Debug)]
enum DonationSubcommand {
    /// Step 1: record the donation (status starts Pending).
    Create {
        fund_id: String,
        #[command(flatten)]
        body: DonationBody,
    },
    /// Step 2: attach evidence images.
    UploadProof {
        donation_id: String,
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },
    /// Step 3: approve (authorizer only).
    Confirm {
        donation_id: String,
    },
    Reject {
        donation_id: String,
    },
    /// Run create → upload-proof → confirm end to end.
    Flow {
        fund_id: String,
        #[command(flatten)]
        body: DonationBody,
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ExpenseCommand {
    #[command(subcommand)]
    command: ExpenseSubcommand,
}

#[derive(Subcommand, Debug)]
enum ExpenseSubcommand {
    Create {
        fund_id: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        purpose: String,
    },
    Confirm {
        expense_id: String,
    },
    Reject {
        expense_id: String,
    },
}

#[derive(Args, Debug)]
struct CampaignCommand {
    #[command(subcommand)]
    command: CampaignSubcommand,
}

#[derive(Subcommand, Debug)]
enum CampaignSubcommand {
    List {
        fund_id: String,
    },
    Show {
        campaign_id: String,
    },
    Create {
        #[arg(long)]
        fund_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        goal_amount: f64,
        #[arg(long)]
        start_time: Option<String>,
        #[arg(long)]
        end_time: Option<String>,
    },
    Close {
        campaign_id: String,
    },
    Donations {
        campaign_id: String,
    },
    Donate {
        campaign_id: String,
        #[command(flatten)]
        body: DonationBody,
    },
    UploadProof {
        donation_id: String,
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },
    ConfirmDonation {
        donation_id: String,
    },
    RejectDonation {
        donation_id: String,
    },
    Expense(CampaignExpenseCommand),
}

#[derive(Args, Debug)]
struct CampaignExpenseCommand {
    #[command(subcommand)]
    command: CampaignExpenseSubcommand,
}

#[derive(Subcommand, Debug)]
enum CampaignExpenseSubcommand {
    Create {
        campaign_id: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        purpose: String,
    },
    Confirm {
        expense_id: String,
    },
    Reject {
        expense_id: String,
    },
}

#[derive(Args, Debug)]
struct NotifyCommand {
    #[command(subcommand)]
    command: NotifySubcommand,
}

#[derive(Subcommand, Debug)]
enum NotifySubcommand {
    List,
    UnreadCount,
    Read { notification_id: String },
    ReadAll,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let session = SessionStore::with_file(cli.token_file);
    let api = ApiClient::new(cli.base_url, session);

    match cli.command {
        Command::Login { email, password } => run_login(&api, &email, &password).await,
        Command::GoogleLogin { credential } => run_google_login(&api, &credential).await,
        Command::Register { email, password, full_name } => {
            let user = account::register(&api, &email, &password, &full_name).await?;
            print_json(&serde_json::to_value(&user)?)
        }
        Command::Logout => {
            api.session().clear();
            eprintln!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&api).await,
        Command::Profile(profile) => run_profile(&api, profile).await,
        Command::Tree(tree) => run_tree(&api, tree).await,
        Command::Member(member) => run_member(&api, member).await,
        Command::Event(event) => run_event(&api, event).await,
        Command::Post(post) => run_post(&api, post).await,
        Command::Fund(fund) => run_fund(&api, fund).await,
        Command::Campaign(campaign) => run_campaign(&api, campaign).await,
        Command::Notify(notify) => run_notify(&api, notify).await,
    }
}

async fn run_login(api: &ApiClient, email: &str, password: &str) -> Result<(), CliError> {
    let response = account::login(api, email, password).await?;
    eprintln!("logged in; token stored");
    if let Some(user) = response.user {
        print_json(&serde_json::to_value(&user)?)?;
    }
    Ok(())
}

async fn run_google_login(api: &ApiClient, credential: &str) -> Result<(), CliError> {
    let response = account::google_login(api, credential).await?;
    eprintln!("logged in via google; token stored");
    if let Some(user) = response.user {
        print_json(&serde_json::to_value(&user)?)?;
    }
    Ok(())
}

async fn run_whoami(api: &ApiClient) -> Result<(), CliError> {
    let token = api.session().token().ok_or(CliError::NotLoggedIn)?;
    let claims = jwt::decode_claims(&token);
    let local = match &claims {
        Some(claims) => json!({
            "sub": claims.sub,
            "email": claims.email,
            "name": claims.name,
            "exp": claims.exp,
            "expired": jwt::is_expired_now(&token),
        }),
        None => json!({ "malformed": true, "expired": true }),
    };
    let user = account::me(api).await?;
    print_json(&json!({ "token": local, "server": user }))
}

async fn run_profile(api: &ApiClient, profile: ProfileCommand) -> Result<(), CliError> {
    match profile.command {
        ProfileSubcommand::Show => {
            let profile = account::profile(api).await?;
            print_json(&serde_json::to_value(&profile)?)
        }
        ProfileSubcommand::Update {
            full_name,
            biography,
            gender,
            date_of_birth,
            address,
            phone,
        } => {
            let update = account::ProfileUpdate {
                full_name,
                biography,
                gender,
                date_of_birth,
                address,
                phone,
            };
            let profile = account::update_profile(api, &update).await?;
            print_json(&serde_json::to_value(&profile)?)
        }
    }
}

async fn run_tree(api: &ApiClient, tree: TreeCommand) -> Result<(), CliError> {
    match tree.command {
        TreeSubcommand::List => {
            let trees = family::list_trees(api).await?;
            print_json(&serde_json::to_value(&trees)?)
        }
        TreeSubcommand::Show { tree_id } => {
            let tree = family::get_tree(api, &tree_id).await?;
            print_json(&serde_json::to_value(&tree)?)
        }
    }
}

async fn run_member(api: &ApiClient, member: MemberCommand) -> Result<(), CliError> {
    match member.command {
        MemberSubcommand::List { tree_id } => {
            let members = family::list_members(api, &tree_id).await?;
            print_json(&serde_json::to_value(&members)?)
        }
        MemberSubcommand::Show { member_id } => {
            let member = family::get_member(api, &member_id).await?;
            print_json(&serde_json::to_value(&member)?)
        }
        MemberSubcommand::Create {
            tree_id,
            full_name,
            gender,
            generation,
            father_id,
            mother_id,
            date_of_birth,
            date_of_death,
            biography,
        } => {
            let body = family::NewFamilyMember {
                family_tree_id: tree_id,
                full_name,
                gender,
                generation,
                father_id,
                mother_id,
                date_of_birth,
                date_of_death,
                biography,
            };
            let member = family::create_member(api, &body).await?;
            print_json(&serde_json::to_value(&member)?)
        }
        MemberSubcommand::Update {
            member_id,
            full_name,
            gender,
            generation,
            date_of_birth,
            date_of_death,
            biography,
        } => {
            let update = family::FamilyMemberUpdate {
                full_name,
                gender,
                generation,
                date_of_birth,
                date_of_death,
                biography,
            };
            let member = family::update_member(api, &member_id, &update).await?;
            print_json(&serde_json::to_value(&member)?)
        }
        MemberSubcommand::Delete { member_id } => {
            family::delete_member(api, &member_id).await?;
            eprintln!("member deleted: {member_id}");
            Ok(())
        }
    }
}

async fn run_event(api: &ApiClient, event: EventCommand) -> Result<(), CliError> {
    match event.command {
        EventSubcommand::List { tree_id, year, month } => {
            let events = events::list_month(api, &tree_id, year, month).await?;
            print_json(&serde_json::to_value(&events)?)
        }
        EventSubcommand::Show { event_id } => {
            let event = events::get(api, &event_id).await?;
            print_json(&serde_json::to_value(&event)?)
        }
        EventSubcommand::Create {
            tree_id,
            title,
            description,
            location,
            start_time,
            end_time,
            recurring,
        } => {
            let body = events::NewEvent {
                family_tree_id: tree_id,
                title,
                description,
                location,
                start_time,
                end_time,
                is_recurring: recurring,
            };
            let event = events::create(api, &body).await?;
            print_json(&serde_json::to_value(&event)?)
        }
        EventSubcommand::Update {
            event_id,
            title,
            description,
            location,
            start_time,
            end_time,
        } => {
            let update = events::EventUpdate {
                title,
                description,
                location,
                start_time,
                end_time,
            };
            let event = events::update(api, &event_id, &update).await?;
            print_json(&serde_json::to_value(&event)?)
        }
        EventSubcommand::Delete { event_id } => {
            events::delete(api, &event_id).await?;
            eprintln!("event deleted: {event_id}");
            Ok(())
        }
    }
}

async fn run_post(api: &ApiClient, post: PostCommand) -> Result<(), CliError> {
    match post.command {
        PostSubcommand::Feed { page, page_size } => {
            let feed = posts::feed(api, page, page_size).await?;
            let pagination = render_page_row(feed.page_index, feed.total_pages);
            print_json(&json!({
                "items": feed.items,
                "pageIndex": feed.page_index,
                "totalPages": feed.total_pages,
                "totalCount": feed.total_count,
                "pagination": pagination,
            }))
        }
        PostSubcommand::Create { content, image_urls } => {
            let post = posts::create(api, &content, &image_urls).await?;
            print_json(&serde_json::to_value(&post)?)
        }
        PostSubcommand::Delete { post_id } => {
            posts::delete(api, &post_id).await?;
            eprintln!("post deleted: {post_id}");
            Ok(())
        }
        PostSubcommand::Comments { post_id } => {
            let comments = posts::comments(api, &post_id).await?;
            print_json(&serde_json::to_value(&comments)?)
        }
        PostSubcommand::Comment { post_id, content } => {
            let comment = posts::comment(api, &post_id, &content).await?;
            print_json(&serde_json::to_value(&comment)?)
        }
        PostSubcommand::DeleteComment { post_id, comment_id } => {
            posts::delete_comment(api, &post_id, &comment_id).await?;
            eprintln!("comment deleted: {comment_id}");
            Ok(())
        }
        PostSubcommand::Reactions { post_id } => {
            let reactions = posts::reactions(api, &post_id).await?;
            print_json(&serde_json::to_value(&reactions)?)
        }
        PostSubcommand::React { post_id, kind } => {
            let kind = parse_reaction(&kind)?;
            posts::react(api, &post_id, kind).await?;
            eprintln!("reacted {} to {post_id}", kind.as_str());
            Ok(())
        }
        PostSubcommand::Unreact { post_id } => {
            posts::unreact(api, &post_id).await?;
            eprintln!("reaction removed from {post_id}");
            Ok(())
        }
    }
}

async fn run_fund(api: &ApiClient, fund: FundCommand) -> Result<(), CliError> {
    match fund.command {
        FundSubcommand::List { tree_id } => {
            let funds = funds::list(api, &tree_id).await?;
            print_json(&serde_json::to_value(&funds)?)
        }
        FundSubcommand::Show { fund_id } => {
            let fund = funds::get(api, &fund_id).await?;
            print_json(&serde_json::to_value(&fund)?)
        }
        FundSubcommand::Balance { fund_id } => {
            let balance = funds::balance(api, &fund_id).await?;
            print_json(&serde_json::to_value(&balance)?)
        }
        FundSubcommand::Donations { fund_id } => {
            let donations = funds::donations(api, &fund_id).await?;
            print_json(&serde_json::to_value(&donations)?)
        }
        FundSubcommand::Donation(donation) => run_donation(api, donation).await,
        FundSubcommand::Expense(expense) => run_expense(api, expense).await,
    }
}

async fn run_donation(api: &ApiClient, donation: DonationCommand) -> Result<(), CliError> {
    match donation.command {
        DonationSubcommand::Create { fund_id, body } => {
            let created = funds::create_donation(api, &fund_id, &new_donation(body)).await?;
            eprintln!("donation created with status {}", created.status);
            print_json(&serde_json::to_value(&created)?)
        }
        DonationSubcommand::UploadProof { donation_id, images } => {
            let images = load_proof_images(&images)?;
            let updated = funds::upload_proof(api, &donation_id, images).await?;
            print_json(&serde_json::to_value(&updated)?)
        }
        DonationSubcommand::Confirm { donation_id } => {
            let updated = funds::confirm_donation(api, &donation_id).await?;
            eprintln!("donation {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
        DonationSubcommand::Reject { donation_id } => {
            let updated = funds::reject_donation(api, &donation_id).await?;
            eprintln!("donation {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
        DonationSubcommand::Flow { fund_id, body, images } => {
            let images = load_proof_images(&images)?;
            let outcome =
                funds::run_donation_flow(api, &fund_id, &new_donation(body), images).await?;
            eprintln!(
                "donation flow finished: status={} state={}",
                outcome.donation.status, outcome.state
            );
            print_json(&json!({
                "donation": outcome.donation,
                "state": outcome.state,
                "balance": outcome.balance,
            }))
        }
    }
}

async fn run_expense(api: &ApiClient, expense: ExpenseCommand) -> Result<(), CliError> {
    match expense.command {
        ExpenseSubcommand::Create { fund_id, amount, purpose } => {
            let body = NewExpense { amount, purpose };
            let created = funds::create_expense(api, &fund_id, &body).await?;
            print_json(&serde_json::to_value(&created)?)
        }
        ExpenseSubcommand::Confirm { expense_id } => {
            let updated = funds::confirm_expense(api, &expense_id).await?;
            eprintln!("expense {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
        ExpenseSubcommand::Reject { expense_id } => {
            let updated = funds::reject_expense(api, &expense_id).await?;
            eprintln!("expense {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
    }
}

async fn run_campaign(api: &ApiClient, campaign: CampaignCommand) -> Result<(), CliError> {
    match campaign.command {
        CampaignSubcommand::List { fund_id } => {
            let campaigns = campaigns::list(api, &fund_id).await?;
            print_json(&serde_json::to_value(&campaigns)?)
        }
        CampaignSubcommand::Show { campaign_id } => {
            let campaign = campaigns::get(api, &campaign_id).await?;
            print_json(&serde_json::to_value(&campaign)?)
        }
        CampaignSubcommand::Create {
            fund_id,
            title,
            description,
            goal_amount,
            start_time,
            end_time,
        } => {
            let body = campaigns::NewCampaign {
                fund_id,
                title,
                description,
                goal_amount,
                start_time,
                end_time,
            };
            let campaign = campaigns::create(api, &body).await?;
            print_json(&serde_json::to_value(&campaign)?)
        }
        CampaignSubcommand::Close { campaign_id } => {
            let campaign = campaigns::close(api, &campaign_id).await?;
            print_json(&serde_json::to_value(&campaign)?)
        }
        CampaignSubcommand::Donations { campaign_id } => {
            let donations = campaigns::donations(api, &campaign_id).await?;
            print_json(&serde_json::to_value(&donations)?)
        }
        CampaignSubcommand::Donate { campaign_id, body } => {
            let created =
                campaigns::create_donation(api, &campaign_id, &new_donation(body)).await?;
            eprintln!("campaign donation created with status {}", created.status);
            print_json(&serde_json::to_value(&created)?)
        }
        CampaignSubcommand::UploadProof { donation_id, images } => {
            let images = load_proof_images(&images)?;
            let updated = campaigns::upload_proof(api, &donation_id, images).await?;
            print_json(&serde_json::to_value(&updated)?)
        }
        CampaignSubcommand::ConfirmDonation { donation_id } => {
            let updated = campaigns::confirm_donation(api, &donation_id).await?;
            eprintln!("donation {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
        CampaignSubcommand::RejectDonation { donation_id } => {
            let updated = campaigns::reject_donation(api, &donation_id).await?;
            eprintln!("donation {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
        CampaignSubcommand::Expense(expense) => run_campaign_expense(api, expense).await,
    }
}

async fn run_campaign_expense(
    api: &ApiClient,
    expense: CampaignExpenseCommand,
) -> Result<(), CliError> {
    match expense.command {
        CampaignExpenseSubcommand::Create { campaign_id, amount, purpose } => {
            let body = NewExpense { amount, purpose };
            let created = campaigns::create_expense(api, &campaign_id, &body).await?;
            print_json(&serde_json::to_value(&created)?)
        }
        CampaignExpenseSubcommand::Confirm { expense_id } => {
            let updated = campaigns::confirm_expense(api, &expense_id).await?;
            eprintln!("expense {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
        CampaignExpenseSubcommand::Reject { expense_id } => {
            let updated = campaigns::reject_expense(api, &expense_id).await?;
            eprintln!("expense {} now {}", updated.id, updated.status);
            print_json(&serde_json::to_value(&updated)?)
        }
    }
}

async fn run_notify(api: &ApiClient, notify: NotifyCommand) -> Result<(), CliError> {
    match notify.command {
        NotifySubcommand::List => {
            let notifications = notifications::list(api).await?;
            print_json(&serde_json::to_value(&notifications)?)
        }
        NotifySubcommand::UnreadCount => {
            let count = notifications::unread_count(api).await?;
            print_json(&json!({ "count": count }))
        }
        NotifySubcommand::Read { notification_id } => {
            notifications::mark_read(api, &notification_id).await?;
            eprintln!("marked read: {notification_id}");
            Ok(())
        }
        NotifySubcommand::ReadAll => {
            notifications::mark_all_read(api).await?;
            eprintln!("all notifications marked read");
            Ok(())
        }
    }
}

fn new_donation(body: DonationBody) -> NewDonation {
    NewDonation {
        donor_name: body.donor_name,
        amount: body.amount,
        method: body.method,
        note: body.note,
    }
}

fn parse_reaction(kind: &str) -> Result<ReactionKind, CliError> {
    match kind.to_ascii_lowercase().as_str() {
        "like" => Ok(ReactionKind::Like),
        "love" => Ok(ReactionKind::Love),
        "haha" => Ok(ReactionKind::Haha),
        "sad" => Ok(ReactionKind::Sad),
        "angry" => Ok(ReactionKind::Angry),
        other => Err(CliError::UnknownReaction(other.to_owned())),
    }
}

/// Guess the MIME type for a proof image from its extension.
fn proof_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn load_proof_images(paths: &[PathBuf]) -> Result<Vec<ProofImage>, CliError> {
    paths
        .iter()
        .map(|path| {
            let bytes = fs::read(path).map_err(|source| CliError::ReadProof {
                path: path.display().to_string(),
                source,
            })?;
            let file_name = path
                .file_name()
                .map_or_else(|| "proof".to_owned(), |name| name.to_string_lossy().into_owned());
            Ok(ProofImage {
                file_name,
                mime_type: proof_mime(path).to_owned(),
                bytes,
            })
        })
        .collect()
}

/// Render the pagination controls the way the web widget would show them.
fn render_page_row(current: u32, total_pages: u32) -> String {
    page_controls(current, total_pages)
        .into_iter()
        .map(|control| match control {
            PageControl::Number(page) if page == current => format!("[{page}]"),
            PageControl::Number(page) => page.to_string(),
            PageControl::Ellipsis => "…".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
