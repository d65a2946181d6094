/// Command overview, or the detailed help of one command (`help pay`)
pub fn execute(args: &[&str]) -> String {
    match args.first().map(|a| a.to_lowercase()).as_deref() {
        Some("pay") | Some("send") | Some("submit") => {
            "pay <amount> <merchant name> [--cardholder <name>]\n\
             Submits a payment. The wallet is only debited when the scorer approves it."
                .to_string()
        }
        Some("history") | Some("ledger") | Some("hist") | Some("refresh") => {
            "history: show the transaction ledger (cached for a short while)\n\
             refresh: drop the cached ledger and fetch it again"
                .to_string()
        }
        _ => "🏦 SecureBank Portal\n\
              \n\
              balance              Show your wallet balance (bal, wallet)\n\
              reset                Restore the starting balance\n\
              pay <amt> <merchant> Submit a payment (send, submit)\n\
              history              Show the transaction ledger (ledger, hist)\n\
              refresh              Re-fetch the transaction ledger\n\
              help [command]       Show this help (?)\n\
              quit                 Leave (exit)"
            .to_string(),
    }
}
