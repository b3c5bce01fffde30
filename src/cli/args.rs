// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// snakefront - Frontend to automate launching a Snakemake transcriptome workflow
pub struct Args {
    /// max number of CPU cores/jobs in parallel if local or cluster/cloud execution
    #[argh(option, short = 'j')]
    pub jobs: usize,

    /// tab separated file with three columns for the species name, forward, and reverse files
    #[argh(option, short = 'i')]
    pub input: Option<String>,

    /// workflow config file; can be given by itself or with -i, -a, -l, -m to overwrite values in the workflow config object
    #[argh(option, short = 'c')]
    pub configfile: Option<String>,

    /// trimming clip for Trimmomatic and the Trinity assembly (default: TruSeq3-PE.fa)
    #[argh(option, short = 'a')]
    pub adapter: Option<String>,

    /// max memory size used per sample during the de novo assembly from Trinity (default: 100G)
    #[argh(option, short = 'm')]
    pub maxmemory: Option<String>,

    /// BUSCO lineage to use (default: mollusca_odb10)
    #[argh(option, short = 'l')]
    pub lineage: Option<String>,

    /// do not execute the workflow, just display what would have been run
    #[argh(switch, short = 'n')]
    pub dryrun: bool,

    /// generate a sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
