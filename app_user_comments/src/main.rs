use app_user_comments::UserComments;

fn main() -> anyhow::Result<()> {
    common::init_logger();
    common::run::<UserComments>()
}
